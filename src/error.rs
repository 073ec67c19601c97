//! Error types for world construction, stepping, and persistence.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimension: {height}x{width} (height and width must be non-negative)")]
    InvalidDimension { height: i64, width: i64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("inconsistent row length: row {row} has {actual} cells, expected {expected}")]
    InconsistentRowLength {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error(
        "dimension mismatch: source is {src_height}x{src_width}, destination is {dst_height}x{dst_width}"
    )]
    DimensionMismatch {
        src_height: usize,
        src_width: usize,
        dst_height: usize,
        dst_width: usize,
    },
}
