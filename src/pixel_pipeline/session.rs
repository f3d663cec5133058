//! Session state and format dispatch
//!
//! This module contains orchestration logic: one session per capture stream,
//! dispatching raw frames to the conversion routine the negotiated format
//! requires.

mod pipeline;


pub use pipeline::{ConversionSession, ConvertedFrame};
