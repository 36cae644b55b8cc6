use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClusterError>;

/// Reasons a clustering run is rejected before any work begins.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("empty input: grid has no pixels")]
    EmptyInput,

    /// Pixel buffer does not fill a `width` x `height` rectangle.
    #[error("malformed grid: {width}x{height} needs {} pixels, got {actual}", area(.width, .height))]
    MalformedGrid {
        width: usize,
        height: usize,
        actual: usize,
    },
}

fn area(width: &usize, height: &usize) -> u128 {
    *width as u128 * *height as u128
}
