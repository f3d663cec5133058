//! Types for the RGIR demosaic stage

use crate::pixel_pipeline::frame::{BgrFrame, GrayFrame};

/// Color and infrared planes split out of one RGIR frame.
#[derive(Debug, Clone)]
pub struct DemosaicResult {
    /// Full-resolution demosaiced color image.
    pub color: BgrFrame,
    /// Infrared plane at quarter resolution: one IR sensel per 2x2 block.
    pub infrared: GrayFrame,
}
