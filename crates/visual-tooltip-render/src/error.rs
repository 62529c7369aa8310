//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while building drawing resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The number of gradient colors does not match the number of positions.
    #[error("gradient has {colors} colors but {positions} positions")]
    GradientLengthMismatch { colors: usize, positions: usize },

    /// A gradient needs at least two stops.
    #[error("gradient needs at least 2 stops, got {0}")]
    GradientTooFewStops(usize),

    /// A gradient position lies outside `[0, 1]`.
    #[error("gradient position {index} is {value}, expected a value in [0, 1]")]
    GradientStopOutOfRange { index: usize, value: f32 },

    /// Gradient positions must be ascending, start at 0 and end at 1.
    #[error("gradient position {index} breaks the ascending 0..=1 ordering")]
    GradientStopsUnordered { index: usize },

    /// Failed to decode image data.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Raw pixel data does not match the declared dimensions.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
