//! Frame buffers and negotiated-format types
//!
//! This module provides the format tags, camera-variant detection, and the
//! grayscale/BGR buffer types shared by every conversion routine.

mod types;

pub use types::{
    BgrFrame,
    CameraVariant,
    GrayFrame,
    NegotiatedFormat,
    NegotiatedFormatBuilder,
    PixelFormat,
};
