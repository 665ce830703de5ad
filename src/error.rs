use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Reasons a bitmap could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("input ended before the bitmap dimensions were read")]
    TruncatedHeader,

    #[error("invalid symbol {symbol:?} at byte {offset}")]
    InvalidSymbol { symbol: char, offset: usize },

    #[error("input ended after {found} of {expected} bitmap symbols")]
    TruncatedInput { expected: usize, found: usize },

    #[error("cannot allocate a {height}x{width} bitmap")]
    Allocation { height: usize, width: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}
