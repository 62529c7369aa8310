//! Error types for tooltip configuration.

use thiserror::Error;
use visual_tooltip_render::RenderError;

/// A rejected [`StyleConfig`](crate::StyleConfig) assignment.
///
/// The setter that returned it left the previous value in place.
#[derive(Error, Debug)]
pub enum StyleError {
    /// Border thickness must stay inside the supported range.
    #[error("border thickness {value} is outside [{min}, {max}]")]
    BorderThicknessOutOfRange { value: u32, min: u32, max: u32 },

    /// The background gradient colors and positions do not form a gradient.
    #[error("invalid background gradient: {0}")]
    Gradient(#[from] RenderError),

    /// A length-like option was given a negative or non-finite value.
    #[error("{property} must be a non-negative number, got {value}")]
    NegativeValue { property: &'static str, value: f32 },
}

/// Result type for configuration setters.
pub type StyleResult<T> = Result<T, StyleError>;
