//! Drawing surface for Visual Tooltip.
//!
//! This crate provides the small 2D layer a custom-drawn tooltip needs:
//! geometry and color types, solid and gradient paints, the [`Renderer`]
//! trait, text measurement, icons and two renderer backends.
//!
//! # Backends
//!
//! - [`RecordingRenderer`] records a display list that can be inspected or
//!   replayed onto another renderer.
//! - [`RasterRenderer`] rasterizes onto an RGBA pixel buffer.
//!
//! ```
//! use visual_tooltip_render::{
//!     Color, FixedAdvanceMeasurer, Rect, RecordingRenderer, Renderer,
//! };
//!
//! let mut renderer = RecordingRenderer::new(FixedAdvanceMeasurer::default());
//! renderer.save();
//! renderer.clip_rect(Rect::new(0.0, 0.0, 120.0, 40.0));
//! renderer.fill_rect(Rect::new(0.0, 0.0, 120.0, 40.0), Color::WHITE);
//! renderer.restore();
//!
//! assert_eq!(renderer.drawing_commands().count(), 1);
//! ```
//!
//! # Gradients
//!
//! A [`GradientBrush`] validates its stops on construction and is released
//! when dropped:
//!
//! ```
//! use visual_tooltip_render::{Color, GradientBrush, Point, RenderError};
//!
//! let err = GradientBrush::new(
//!     &[Color::WHITE, Color::BLACK],
//!     &[0.0],
//!     0.0,
//!     Point::ZERO,
//!     Point::new(0.0, 10.0),
//! )
//! .unwrap_err();
//! assert!(matches!(err, RenderError::GradientLengthMismatch { .. }));
//! ```

mod error;
mod gradient;
mod image;
mod paint;
mod raster;
mod recording;
mod renderer;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};

// Renderer API
pub use raster::RasterRenderer;
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{RenderState, RenderStateStack, Renderer};

// Drawing types
pub use crate::image::{Image, ImageScaleMode};
pub use gradient::{GradientBrush, validate_stops};
pub use paint::{GradientStop, LinearGradient, Paint, Stroke};
pub use text::{
    CosmicTextMeasurer, FixedAdvanceMeasurer, Font, FontFamily, FontStyle, FontWeight,
    TextMeasurer, TextRenderingHint,
};
pub use types::{Color, Point, Rect, Size};
