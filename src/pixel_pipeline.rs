//! Pixel format conversion pipeline
//!
//! This module converts raw See3CAM sensor frames into renderable or savable
//! buffers, with separate modules for per-format conversion routines, RGIR
//! demosaicing, and session orchestration.

pub mod common;
pub mod conversions;
pub mod demosaic;
pub mod frame;
pub mod session;

pub use common::{
    ConversionError,
    Result,
};

pub use frame::{
    BgrFrame,
    CameraVariant,
    GrayFrame,
    NegotiatedFormat,
    NegotiatedFormatBuilder,
    PixelFormat,
};

pub use demosaic::{
    DemosaicResult,
    RgirDemosaic,
};

pub use session::{
    ConversionSession,
    ConvertedFrame,
};
