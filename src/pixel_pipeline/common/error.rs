use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unrecognized pixel format: {0:?}")]
    UnrecognizedFormat(String),

    #[error("Y16 frame received but no camera variant was resolved at session init")]
    UnconfiguredVariant,

    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Frame buffer is {actual} bytes, expected {expected}")]
    FrameSizeMismatch { expected: usize, actual: usize },

    #[error("Demosaic failed: {0}")]
    DemosaicFailed(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
