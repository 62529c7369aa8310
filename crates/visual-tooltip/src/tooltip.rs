//! The tooltip instance a host drives.
//!
//! A host calls [`ToolTip::on_size_requested`] before showing the popup and
//! [`ToolTip::on_paint`] for every frame it is visible. The two callbacks
//! are never concurrent for one instance.

use tracing::trace;
use visual_tooltip_render::{Rect, Renderer, Size, TextMeasurer};

use crate::content::{ToolTipContent, ToolTipVariant};
use crate::layout::{LayoutState, compute_size};
use crate::paint::paint;
use crate::style::StyleConfig;
use crate::targets;

/// A custom-drawn tooltip.
///
/// # Example
///
/// ```
/// use visual_tooltip::{ToolTip, ToolTipContent, ToolTipVariant};
/// use visual_tooltip_render::{FixedAdvanceMeasurer, RecordingRenderer, Rect};
///
/// let mut tooltip = ToolTip::new(ToolTipContent::new("Saved successfully").with_title("Info"));
///
/// let mut renderer = RecordingRenderer::new(FixedAdvanceMeasurer::default());
/// let size = tooltip.on_size_requested(&mut renderer);
/// tooltip.on_paint(&mut renderer, Rect::new(0.0, 0.0, size.width, size.height));
///
/// assert_eq!(tooltip.variant(), ToolTipVariant::Default);
/// assert!(tooltip.layout().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolTip {
    style: StyleConfig,
    content: ToolTipContent,
    variant: ToolTipVariant,
    layout: Option<LayoutState>,
}

impl ToolTip {
    /// Create a `Default`-variant tooltip with the default style.
    pub fn new(content: ToolTipContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    /// Compute the size the popup needs for the current content.
    ///
    /// Does not draw. The element positions are kept until the next cycle.
    pub fn on_size_requested<M: TextMeasurer + ?Sized>(&mut self, measurer: &mut M) -> Size {
        let (size, layout) = compute_size(self.variant, &self.content, &self.style, measurer);
        self.layout = Some(layout);
        size
    }

    /// Draw the tooltip into `bounds`.
    ///
    /// The layout is recomputed against `renderer`; nothing from the size
    /// request is reused.
    pub fn on_paint<R: Renderer>(&mut self, renderer: &mut R, bounds: Rect) {
        let layout = paint(renderer, bounds, self.variant, &self.content, &self.style);
        trace!(target: targets::PAINT, ?layout, "cached painted layout");
        self.layout = Some(layout);
    }

    /// Element positions from the most recent callback, if any.
    ///
    /// After a size request these are relative to the popup; after a paint
    /// they are in surface coordinates.
    pub fn layout(&self) -> Option<&LayoutState> {
        self.layout.as_ref()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The layout variant.
    pub fn variant(&self) -> ToolTipVariant {
        self.variant
    }

    /// Set the layout variant.
    pub fn set_variant(&mut self, variant: ToolTipVariant) {
        self.variant = variant;
    }

    /// Set the layout variant using builder pattern.
    pub fn with_variant(mut self, variant: ToolTipVariant) -> Self {
        self.variant = variant;
        self
    }

    /// The appearance options.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Mutable access to the appearance options.
    ///
    /// Validation happens in the [`StyleConfig`] setters.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Replace the appearance options.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    /// Replace the appearance options using builder pattern.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// What the tooltip shows.
    pub fn content(&self) -> &ToolTipContent {
        &self.content
    }

    /// Mutable access to the content.
    pub fn content_mut(&mut self) -> &mut ToolTipContent {
        &mut self.content
    }

    /// Replace the content.
    pub fn set_content(&mut self, content: ToolTipContent) {
        self.content = content;
    }
}
