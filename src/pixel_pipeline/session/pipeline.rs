use std::borrow::Cow;

use tracing::{info, instrument};

use crate::pixel_pipeline::{
    common::error::{ConversionError, Result},
    conversions::{y12, y16, yuv},
    demosaic::{DemosaicResult, RgirDemosaic},
    frame::{BgrFrame, CameraVariant, GrayFrame, NegotiatedFormat, PixelFormat},
};

/// A dispatched conversion result.
///
/// `Gray` borrows the session's reusable preview buffer on the Y12 path and
/// owns its data on the Y16 scaling paths; the other variants always own
/// their buffers.
#[derive(Debug)]
pub enum ConvertedFrame<'a> {
    Gray(Cow<'a, GrayFrame>),
    Bgr(BgrFrame),
    ColorWithIr(DemosaicResult),
}

/// Per-capture-session conversion state.
///
/// Holds the negotiated format, the camera variant resolved from the device
/// name, and the reusable 8-bit preview buffer. Conversion routines that
/// write into that buffer take `&mut self`, so the borrow checker serializes
/// conversions on one session; independent sessions do not interact.
#[derive(Debug)]
pub struct ConversionSession {
    format: NegotiatedFormat,
    variant: Option<CameraVariant>,
    demosaic: RgirDemosaic,
    y8_frame: GrayFrame,
}

impl ConversionSession {
    /// Establishes session state from the negotiated format and the device
    /// display name. The camera variant only matters for Y16 devices; other
    /// formats leave it unresolved.
    pub fn new(format: NegotiatedFormat, device_name: &str) -> Result<Self> {
        if format.width == 0 || format.height == 0 {
            return Err(ConversionError::InvalidDimensions(
                format.width,
                format.height,
            ));
        }

        let variant = (format.pixel_format == PixelFormat::Y16)
            .then(|| CameraVariant::from_device_name(device_name));

        info!(
            format = format.pixel_format.fourcc(),
            width = format.width,
            height = format.height,
            fps = format.fps,
            ?variant,
            "Conversion session initialized"
        );

        let y8_frame = GrayFrame::zeroed(format.width, format.height);

        Ok(Self {
            format,
            variant,
            demosaic: RgirDemosaic::new(),
            y8_frame,
        })
    }

    pub fn format(&self) -> &NegotiatedFormat {
        &self.format
    }

    pub fn camera_variant(&self) -> Option<CameraVariant> {
        self.variant
    }

    /// Converts one raw frame according to the session's pixel format.
    ///
    /// The Y12 path overwrites the session's reusable buffer and returns a
    /// borrow of it, so the result must be consumed before the next call.
    #[instrument(skip(self, raw), fields(format = self.format.pixel_format.fourcc(), len = raw.len()))]
    pub fn convert_frame(&mut self, raw: &[u8]) -> Result<ConvertedFrame<'_>> {
        let (width, height) = (self.format.width, self.format.height);

        match self.format.pixel_format {
            PixelFormat::Uyvy => Ok(ConvertedFrame::Bgr(yuv::uyvy_to_bgr(raw, width, height)?)),
            PixelFormat::Yuy2 => Ok(ConvertedFrame::Bgr(yuv::yuy2_to_bgr(raw, width, height)?)),
            PixelFormat::Y12 => {
                y12::unpack_y12_to_y8(raw, &mut self.y8_frame)?;
                Ok(ConvertedFrame::Gray(Cow::Borrowed(&self.y8_frame)))
            }
            PixelFormat::Y16 => self.convert_y16(raw),
        }
    }

    /// Y16 conversion, dispatched on the camera variant resolved at init.
    ///
    /// Fails with [`ConversionError::UnconfiguredVariant`] when the session
    /// was not negotiated as Y16 and therefore holds no variant.
    pub fn convert_y16(&self, raw: &[u8]) -> Result<ConvertedFrame<'_>> {
        let (width, height) = (self.format.width, self.format.height);

        match self.variant.ok_or(ConversionError::UnconfiguredVariant)? {
            CameraVariant::See3Cam20Cug => Ok(ConvertedFrame::Gray(Cow::Owned(
                y16::scale_y16_to_y8(raw, width, height, y16::SCALE_SEE3CAM_20CUG)?,
            ))),
            CameraVariant::OtherY16 => Ok(ConvertedFrame::Gray(Cow::Owned(
                y16::scale_y16_to_y8(raw, width, height, y16::SCALE_OTHER_Y16)?,
            ))),
            CameraVariant::See3CamCu40 => Ok(ConvertedFrame::ColorWithIr(
                self.demosaic.process(raw, width, height)?,
            )),
        }
    }

    /// Expands a packed Y12 frame to padded 16-bit for raw still capture.
    ///
    /// Allocates fresh output per call; the preview buffer is untouched, so
    /// stills can be taken without disturbing an in-flight preview frame.
    #[instrument(skip(self, raw), fields(len = raw.len()))]
    pub fn convert_y12_for_still(&self, raw: &[u8]) -> Result<Vec<u8>> {
        y12::y12_to_y16_still(raw, self.format.width, self.format.height)
    }
}
