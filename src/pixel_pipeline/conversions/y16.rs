//! 16-bit grayscale scaling.
//!
//! Y16 cameras differ in how many of the 16 bits carry signal, so the scale
//! factor mapping them into 8-bit range is chosen per camera variant.

use tracing::debug;

use crate::pixel_pipeline::common::error::{ConversionError, Result};
use crate::pixel_pipeline::frame::GrayFrame;

/// The See3CAM_20CUG exposes a 10-bit effective range; 255/1024 maps it onto
/// 8 bits.
pub const SCALE_SEE3CAM_20CUG: f32 = 0.2490234375;

/// Other Y16 cameras are assumed to fill roughly 12 bits.
pub const SCALE_OTHER_Y16: f32 = 0.06226;

/// Linear scale with saturation: `|v * scale|` rounded, clamped to u8 range.
#[inline]
pub fn scale_abs(value: u16, scale: f32) -> u8 {
    (f32::from(value) * scale).abs().round().min(255.0) as u8
}

/// Scales a little-endian Y16 frame down to an 8-bit grayscale frame.
/// Allocates the output; the 16-bit input is never retained.
pub fn scale_y16_to_y8(raw: &[u8], width: usize, height: usize, scale: f32) -> Result<GrayFrame> {
    let expected = width * height * 2;
    if raw.len() != expected {
        return Err(ConversionError::FrameSizeMismatch {
            expected,
            actual: raw.len(),
        });
    }
    debug!("Scaling {}x{} Y16 frame by {}", width, height, scale);

    let data = raw
        .chunks_exact(2)
        .map(|s| scale_abs(u16::from_le_bytes([s[0], s[1]]), scale))
        .collect();

    Ok(GrayFrame {
        width,
        height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_20cug_saturates_and_preserves_zero() {
        assert_eq!(scale_abs(0, SCALE_SEE3CAM_20CUG), 0);
        assert_eq!(scale_abs(1023, SCALE_SEE3CAM_20CUG), 255);
        // Values past the 10-bit range clamp instead of wrapping.
        assert_eq!(scale_abs(4095, SCALE_SEE3CAM_20CUG), 255);
        assert_eq!(scale_abs(u16::MAX, SCALE_SEE3CAM_20CUG), 255);
    }

    #[test]
    fn scale_20cug_is_monotone() {
        let mut prev = 0;
        for v in 0..=1023 {
            let scaled = scale_abs(v, SCALE_SEE3CAM_20CUG);
            assert!(scaled >= prev, "value {v} scaled below its predecessor");
            prev = scaled;
        }
    }

    #[test]
    fn other_y16_scale_covers_twelve_bits() {
        assert_eq!(scale_abs(0, SCALE_OTHER_Y16), 0);
        assert_eq!(scale_abs(2048, SCALE_OTHER_Y16), 128);
        assert_eq!(scale_abs(4095, SCALE_OTHER_Y16), 255);
    }

    #[test]
    fn frame_samples_are_little_endian() {
        let raw = 512u16.to_le_bytes().to_vec();
        let frame = scale_y16_to_y8(&raw, 1, 1, SCALE_SEE3CAM_20CUG).unwrap();
        // 512 * 255/1024 = 127.5, rounds up.
        assert_eq!(frame.data, vec![128]);
    }

    #[test]
    fn frame_length_is_validated() {
        let err = scale_y16_to_y8(&[0u8; 3], 1, 1, SCALE_OTHER_Y16).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::FrameSizeMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }
}
