use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("Rectangle #{index} has a non-positive dimension ({width}x{height})")]
    InvalidDimension { index: usize, width: u32, height: u32 },
    #[error(
        "Rectangle #{index} ({width}x{height}) does not fit a {bin_width}x{bin_height} bin in either orientation"
    )]
    DoesNotFit {
        index: usize,
        width: u32,
        height: u32,
        bin_width: u32,
        bin_height: u32,
    },
    #[error(
        "Rectangle #{index} ({width}x{height}) does not fit the padded bin area ({usable_width}x{usable_height})"
    )]
    PaddedDoesNotFit {
        index: usize,
        width: u32,
        height: u32,
        usable_width: u32,
        usable_height: u32,
    },
    #[error("Invalid bin dimensions: {width}x{height}")]
    InvalidBinSize { width: u32, height: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
