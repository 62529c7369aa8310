//! Layout and paint engine for custom-drawn tooltips.
//!
//! A host toolkit owns the popup window and drives a [`ToolTip`] through two
//! callbacks:
//!
//! - [`ToolTip::on_size_requested`] measures the content and returns the
//!   size the popup needs.
//! - [`ToolTip::on_paint`] draws the background gradient, border, optional
//!   text shadow and the variant's elements into the assigned bounds.
//!
//! The same logic is available as the free functions [`compute_size`] and
//! [`paint`] for hosts that keep their own state.
//!
//! # Variants
//!
//! - [`ToolTipVariant::Default`]: title, separator line, body text and an
//!   optional icon.
//! - [`ToolTipVariant::Image`]: the icon alone.
//! - [`ToolTipVariant::Text`]: the body text alone.
//!
//! # Example
//!
//! ```
//! use visual_tooltip::{ToolTip, ToolTipContent, ToolTipVariant};
//! use visual_tooltip_render::{FixedAdvanceMeasurer, RecordingRenderer, Rect, Size};
//!
//! let mut tooltip = ToolTip::new(ToolTipContent::default())
//!     .with_variant(ToolTipVariant::Image);
//!
//! let mut renderer = RecordingRenderer::new(FixedAdvanceMeasurer::default());
//! let size = tooltip.on_size_requested(&mut renderer);
//! assert_eq!(size, Size::new(33.0, 33.0));
//!
//! tooltip.on_paint(&mut renderer, Rect::new(0.0, 0.0, size.width, size.height));
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing` under the targets in [`targets`]. No
//! subscriber is installed.

mod content;
mod error;
mod layout;
mod paint;
mod style;
mod tooltip;

pub use content::{ToolTipContent, ToolTipVariant};
pub use error::{StyleError, StyleResult};
pub use layout::{IMAGE_OUTLINE_ALLOWANCE, LayoutState, SEPARATOR_OFFSET, compute_size};
pub use paint::{ICON_BORDER_WIDTH, SEPARATOR_LINE_WIDTH, SHADOW_OFFSET, paint};
pub use style::{
    DEFAULT_FONT_SIZE, MAX_BORDER_THICKNESS, MIN_BORDER_THICKNESS, Padding, StyleConfig,
};
pub use tooltip::ToolTip;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Size resolution and element placement.
    pub const LAYOUT: &str = "visual_tooltip::layout";
    /// The paint pipeline.
    pub const PAINT: &str = "visual_tooltip::paint";
    /// Configuration validation.
    pub const STYLE: &str = "visual_tooltip::style";
}
