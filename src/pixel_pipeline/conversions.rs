//! Per-format conversion routines
//!
//! Each submodule handles one raw encoding; the session module dispatches
//! into them based on the negotiated format.

pub mod y12;
pub mod y16;
pub mod yuv;
