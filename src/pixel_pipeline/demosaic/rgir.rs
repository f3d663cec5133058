use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::debug;

use crate::pixel_pipeline::common::error::{ConversionError, Result};
use crate::pixel_pipeline::conversions::y16::scale_abs;
use crate::pixel_pipeline::demosaic::DemosaicResult;
use crate::pixel_pipeline::frame::{BgrFrame, GrayFrame};

/// Scale bringing the sensor's 16-bit samples into 8-bit range before
/// demosaicing.
const PRE_DEMOSAIC_SCALE: f32 = 0.249023;

/// Demosaicer for the See3CAM_CU40's RGIR layout.
///
/// Even rows interleave red and green sensels, odd rows interleave green and
/// infrared. Each 2x2 block's IR sensel is replaced with the adjacent green
/// sample to recover a standard RGGB mosaic, and the IR samples are gathered
/// into a quarter-resolution plane of their own. The substitution trades
/// color fidelity at the replaced positions for IR recovery.
#[derive(Debug)]
pub struct RgirDemosaic;

impl RgirDemosaic {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, raw: &[u8], width: usize, height: usize) -> Result<DemosaicResult> {
        if width % 2 != 0 || height % 2 != 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        let expected = width * height * 2;
        if raw.len() != expected {
            return Err(ConversionError::FrameSizeMismatch {
                expected,
                actual: raw.len(),
            });
        }
        debug!("Demosaicing {}x{} RGIR frame", width, height);

        let rgir: Vec<u8> = raw
            .chunks_exact(2)
            .map(|s| scale_abs(u16::from_le_bytes([s[0], s[1]]), PRE_DEMOSAIC_SCALE))
            .collect();

        let mut rggb = rgir.clone();
        let mut infrared = GrayFrame::zeroed(width / 2, height / 2);

        for i in (0..height).step_by(2) {
            for j in (0..width).step_by(2) {
                // The green sensel at (i, j+1) stands in for the IR sensel at
                // (i+1, j), which moves to the infrared plane.
                rggb[(i + 1) * width + j] = rgir[i * width + j + 1];
                infrared.data[(i / 2) * (width / 2) + j / 2] = rgir[(i + 1) * width + j];
            }
        }

        let color = demosaic_rggb(&rggb, width, height)?;

        Ok(DemosaicResult { color, infrared })
    }
}

impl Default for RgirDemosaic {
    fn default() -> Self {
        Self::new()
    }
}

/// Bilinear RGGB demosaic of an 8-bit mosaic, reordered to BGR.
fn demosaic_rggb(mosaic: &[u8], width: usize, height: usize) -> Result<BgrFrame> {
    let mut rgb = vec![0u8; width * height * 3];
    let mut raster = RasterMut::new(width, height, RasterDepth::Depth8, &mut rgb);

    bayer::run_demosaic(
        &mut Cursor::new(mosaic),
        BayerDepth::Depth8,
        CFA::RGGB,
        Demosaic::Linear,
        &mut raster,
    )
    .map_err(|e| ConversionError::DemosaicFailed(format!("{e:?}")))?;

    for px in rgb.chunks_exact_mut(3) {
        px.swap(0, 2);
    }

    Ok(BgrFrame {
        width,
        height,
        data: rgb,
    })
}
