//! YUV 4:2:2 to BGR conversion.
//!
//! UYVY and YUY2 carry the same samples in different byte orders; both decode
//! with BT.601 coefficients:
//! - R = Y + 1.402 * (V - 128)
//! - G = Y - 0.344 * (U - 128) - 0.714 * (V - 128)
//! - B = Y + 1.772 * (U - 128)

use tracing::debug;

use crate::pixel_pipeline::common::error::{ConversionError, Result};
use crate::pixel_pipeline::frame::BgrFrame;

/// Converts a UYVY frame (`U Y0 V Y1` groups) to BGR.
pub fn uyvy_to_bgr(raw: &[u8], width: usize, height: usize) -> Result<BgrFrame> {
    convert_422(raw, width, height, |group| {
        (group[1], group[3], group[0], group[2])
    })
}

/// Converts a YUY2 frame (`Y0 U Y1 V` groups) to BGR.
pub fn yuy2_to_bgr(raw: &[u8], width: usize, height: usize) -> Result<BgrFrame> {
    convert_422(raw, width, height, |group| {
        (group[0], group[2], group[1], group[3])
    })
}

/// Shared 4:2:2 decode; `order` extracts (y0, y1, u, v) from one 4-byte
/// group of two pixels.
fn convert_422(
    raw: &[u8],
    width: usize,
    height: usize,
    order: impl Fn(&[u8]) -> (u8, u8, u8, u8),
) -> Result<BgrFrame> {
    let expected = width * height * 2;
    if raw.len() != expected {
        return Err(ConversionError::FrameSizeMismatch {
            expected,
            actual: raw.len(),
        });
    }
    debug!("Converting {}x{} 4:2:2 frame to BGR", width, height);

    let mut data = Vec::with_capacity(width * height * 3);
    for group in raw.chunks_exact(4) {
        let (y0, y1, u, v) = order(group);
        let u = u as f32 - 128.0;
        let v = v as f32 - 128.0;
        for y in [y0 as f32, y1 as f32] {
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            data.extend_from_slice(&[b, g, r]);
        }
    }

    Ok(BgrFrame {
        width,
        height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_chroma_gives_gray_pixels() {
        // Y=255 with neutral U/V decodes to white.
        let raw = vec![128u8, 255, 128, 255];
        let frame = uyvy_to_bgr(&raw, 2, 1).unwrap();

        assert_eq!(frame.data.len(), 6);
        assert!(frame.data.iter().all(|&c| c > 250));
    }

    #[test]
    fn red_chroma_lands_in_the_red_channel() {
        // U neutral, V well above neutral: output is B,G,R ordered.
        let raw = vec![128u8, 128, 240, 128];
        let frame = uyvy_to_bgr(&raw, 2, 1).unwrap();

        assert_eq!(frame.data[0], 128); // B
        assert_eq!(frame.data[1], 48); // G
        assert_eq!(frame.data[2], 255); // R, saturated
    }

    #[test]
    fn yuy2_matches_uyvy_on_reordered_bytes() {
        let uyvy = vec![90u8, 41, 240, 120]; // U Y0 V Y1
        let yuy2 = vec![41u8, 90, 120, 240]; // Y0 U Y1 V

        assert_eq!(
            uyvy_to_bgr(&uyvy, 2, 1).unwrap(),
            yuy2_to_bgr(&yuy2, 2, 1).unwrap()
        );
    }

    #[test]
    fn frame_length_is_validated() {
        let err = uyvy_to_bgr(&[0u8; 7], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::FrameSizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }
}
