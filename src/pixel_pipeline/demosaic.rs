//! RGIR Bayer demosaicing for cameras with interleaved color and infrared
//! sensels.

mod rgir;
mod types;

pub use rgir::RgirDemosaic;
pub use types::DemosaicResult;
