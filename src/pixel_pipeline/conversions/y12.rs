//! Packed 12-bit grayscale handling.
//!
//! Y12 packs two samples into three bytes: the high eight bits of each
//! sample, followed by one byte carrying both low nibbles.

use tracing::debug;

use crate::pixel_pipeline::common::error::{ConversionError, Result};
use crate::pixel_pipeline::frame::GrayFrame;

/// Packed byte length of a Y12 frame.
pub fn packed_len(width: usize, height: usize) -> usize {
    width * height * 3 / 2
}

/// Unpacks a Y12 frame into the caller's 8-bit buffer, keeping only the high
/// byte of each sample. The low-nibble byte of every triplet is discarded;
/// preview rendering does not use the extra precision.
///
/// The output buffer is overwritten in place and never resized, so a session
/// can reuse one allocation across frames. Only one unpack may write to a
/// given buffer at a time.
pub fn unpack_y12_to_y8(raw: &[u8], out: &mut GrayFrame) -> Result<()> {
    let expected = packed_len(out.width, out.height);
    if raw.len() != expected {
        return Err(ConversionError::FrameSizeMismatch {
            expected,
            actual: raw.len(),
        });
    }
    debug!("Unpacking {}x{} Y12 frame to Y8", out.width, out.height);

    for (dst, src) in out.data.chunks_exact_mut(2).zip(raw.chunks_exact(3)) {
        dst[0] = src[0];
        dst[1] = src[1];
    }

    Ok(())
}

/// Re-expands packed 12-bit samples into little-endian 16-bit containers for
/// raw still capture. Each triplet `b0 b1 b2` becomes four bytes holding the
/// full 12-bit values of both samples.
///
/// The nibble arrangement is what downstream raw readers decode; the byte
/// order must not change. Output is freshly allocated per call, since stills
/// are infrequent compared to preview frames.
pub fn y12_to_y16_still(raw: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let expected = packed_len(width, height);
    if raw.len() != expected {
        return Err(ConversionError::FrameSizeMismatch {
            expected,
            actual: raw.len(),
        });
    }
    debug!("Expanding {}x{} Y12 frame to padded Y16", width, height);

    let mut still = vec![0u8; width * height * 2];
    for (dst, src) in still.chunks_exact_mut(4).zip(raw.chunks_exact(3)) {
        let (b0, b1, b2) = (src[0], src[1], src[2]);
        dst[1] = (b0 & 0xF0) >> 4;
        dst[0] = ((b0 & 0x0F) << 4) | (b2 & 0x0F);
        dst[3] = (b1 & 0xF0) >> 4;
        dst[2] = ((b1 & 0x0F) << 4) | ((b2 & 0xF0) >> 4);
    }

    Ok(still)
}
