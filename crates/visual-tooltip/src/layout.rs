//! Size resolution and element placement.
//!
//! [`compute_size`] measures the content of one variant, returns the size
//! the popup needs and places every element relative to the popup's top-left
//! corner. The paint pipeline runs the same function again against the
//! surface it draws on, so both phases always agree.

use tracing::{debug, trace};
use visual_tooltip_render::{Point, Rect, Size, TextMeasurer};

use crate::content::{ToolTipContent, ToolTipVariant};
use crate::style::StyleConfig;
use crate::targets;

/// Vertical distance from the popup top to the separator, below the title.
pub const SEPARATOR_OFFSET: f32 = 5.0;

/// Extra pixel the `Image` variant reserves past the icon on each axis.
pub const IMAGE_OUTLINE_ALLOWANCE: f32 = 1.0;

/// Element positions for one show/paint cycle.
///
/// Anchors are top-left corners. Elements a variant does not show sit at the
/// padding origin, and the separator is empty outside the `Default` variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    /// Where the title line is drawn.
    pub title_anchor: Point,
    /// Where the body text is drawn.
    pub text_anchor: Point,
    /// Where the icon is stretched to.
    pub icon_rect: Rect,
    /// The separator band. The line runs along its top edge.
    pub separator: Rect,
    /// Outline stroked around the icon when the icon border is enabled.
    pub icon_outline: Rect,
}

impl LayoutState {
    /// Move every element by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            title_anchor: self.title_anchor.offset(dx, dy),
            text_anchor: self.text_anchor.offset(dx, dy),
            icon_rect: self.icon_rect.offset(dx, dy),
            separator: self.separator.offset(dx, dy),
            icon_outline: self.icon_outline.offset(dx, dy),
        }
    }

    /// Left end of the separator line.
    pub fn separator_start(&self) -> Point {
        self.separator.top_left()
    }

    /// Right end of the separator line.
    pub fn separator_end(&self) -> Point {
        self.separator.top_right()
    }
}

/// Measure `content` for `variant` and place its elements.
///
/// Returns the size the popup needs, padding included, together with the
/// element positions relative to the popup's top-left corner.
pub fn compute_size<M>(
    variant: ToolTipVariant,
    content: &ToolTipContent,
    style: &StyleConfig,
    measurer: &mut M,
) -> (Size, LayoutState)
where
    M: TextMeasurer + ?Sized,
{
    let padding = style.padding();
    let spacing = style.spacing();
    let origin = Point::new(padding.left, padding.top);

    let mut layout = LayoutState {
        title_anchor: origin,
        text_anchor: origin,
        icon_rect: Rect::ZERO,
        separator: Rect::ZERO,
        icon_outline: Rect::ZERO,
    };
    let mut icon_anchor = origin;

    let content_size = match variant {
        ToolTipVariant::Default => {
            // The title is measured in the body font even though it is drawn bold.
            let title = measurer.measure(content.title(), style.font());
            let text = measurer.measure(content.text(), style.font());
            let icon = if content.icon().is_some() {
                style.icon_size()
            } else {
                Size::ZERO
            };
            let thickness = style.separator_thickness();

            let width = title.width.max(icon.width + text.width);
            let height = title.height + thickness + text.height.max(icon.height);

            let separator_top = title.height + SEPARATOR_OFFSET;
            let separator_left = padding.left + spacing;
            layout.separator = Rect::from_corners(
                Point::new(separator_left, separator_top),
                Point::new(
                    (width - spacing).max(separator_left),
                    separator_top + thickness,
                ),
            );

            layout.text_anchor = Point::new(
                padding.left + icon.width + spacing,
                layout.separator.top() + spacing,
            );
            icon_anchor = Point::new(padding.left, layout.text_anchor.y);

            Size::new(width, height)
        }
        ToolTipVariant::Image => {
            let icon = style.icon_size();
            Size::new(
                icon.width + IMAGE_OUTLINE_ALLOWANCE,
                icon.height + IMAGE_OUTLINE_ALLOWANCE,
            )
        }
        ToolTipVariant::Text => measurer.measure(content.text(), style.font()),
    };

    // Built even without an icon so enabling the icon border later needs no relayout.
    layout.icon_rect = Rect::from_origin_size(icon_anchor, style.icon_size());
    layout.icon_outline = layout.icon_rect;

    let size = Size::new(
        padding.left + content_size.width + padding.right,
        padding.top + content_size.height + padding.bottom,
    );

    trace!(
        target: targets::LAYOUT,
        title = ?layout.title_anchor,
        text = ?layout.text_anchor,
        icon = ?layout.icon_rect,
        separator = ?layout.separator,
        "placed tooltip elements"
    );
    debug!(
        target: targets::LAYOUT,
        ?variant,
        width = size.width,
        height = size.height,
        "resolved tooltip size"
    );

    (size, layout)
}
