//! The tooltip paint pipeline.
//!
//! [`paint`] draws one frame of a tooltip into the bounds the host assigned,
//! back to front:
//!
//! 1. background gradient over the full bounds
//! 2. border, if visible
//! 3. body text shadow, if enabled and the variant shows text
//! 4. the variant's own elements
//!
//! Element positions are recomputed from the surface on every call. Nothing
//! from a previous cycle is reused.

use std::ops::{Deref, DerefMut};

use tracing::{debug, error, trace};
use visual_tooltip_render::{
    Color, Font, GradientBrush, ImageScaleMode, Point, Rect, Renderer, Stroke,
};

use crate::content::{ToolTipContent, ToolTipVariant};
use crate::layout::{LayoutState, compute_size};
use crate::style::StyleConfig;
use crate::targets;

/// Offset of the body text shadow from the body text.
pub const SHADOW_OFFSET: Point = Point::new(1.0, 1.0);

/// Width of the outline drawn around the icon.
pub const ICON_BORDER_WIDTH: f32 = 1.0;

/// Width of the separator line. The configured separator thickness only
/// affects layout.
pub const SEPARATOR_LINE_WIDTH: f32 = 1.0;

/// Keeps the renderer state saved until dropped.
///
/// Restores on every exit path, unwinding included.
struct SavedState<'a, R: Renderer> {
    renderer: &'a mut R,
}

impl<'a, R: Renderer> SavedState<'a, R> {
    fn new(renderer: &'a mut R) -> Self {
        renderer.save();
        Self { renderer }
    }
}

impl<R: Renderer> Deref for SavedState<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer> DerefMut for SavedState<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer> Drop for SavedState<'_, R> {
    fn drop(&mut self) {
        self.renderer.restore();
    }
}

/// Draw a tooltip into `bounds`.
///
/// Returns the element positions that were drawn, in surface coordinates.
/// If the background brush cannot be built nothing is drawn.
pub fn paint<R: Renderer>(
    renderer: &mut R,
    bounds: Rect,
    variant: ToolTipVariant,
    content: &ToolTipContent,
    style: &StyleConfig,
) -> LayoutState {
    let (_, layout) = compute_size(variant, content, style, renderer);
    let layout = layout.offset(bounds.left(), bounds.top());

    debug!(target: targets::PAINT, ?variant, ?bounds, "painting tooltip");

    let brush = match GradientBrush::new(
        style.background_colors(),
        style.gradient_positions(),
        style.gradient_angle(),
        bounds.top_right(),
        bounds.bottom_right(),
    ) {
        Ok(brush) => brush,
        Err(err) => {
            error!(target: targets::PAINT, %err, "abandoned tooltip paint");
            return layout;
        }
    };

    let mut surface = SavedState::new(renderer);
    surface.clip_rect(bounds);
    surface.set_text_rendering(style.text_rendering_hint());

    surface.fill_rect(bounds, brush.to_paint());

    if style.border_visible() {
        let outline = Rect::new(
            bounds.left(),
            bounds.top(),
            bounds.width() - 1.0,
            bounds.height() - 1.0,
        );
        let stroke = Stroke::new(style.border_color(), style.border_thickness() as f32);
        surface.stroke_rect(outline, &stroke);
    }

    if style.text_shadow() && variant.draws_text() {
        let anchor = layout
            .text_anchor
            .offset(SHADOW_OFFSET.x, SHADOW_OFFSET.y);
        draw_label(
            &mut *surface,
            content.text(),
            &style.font().regular(),
            anchor,
            Color::SILVER,
        );
    }

    match variant {
        ToolTipVariant::Default => {
            draw_label(
                &mut *surface,
                content.title(),
                style.title_font(),
                layout.title_anchor,
                style.title_color(),
            );
            surface.draw_line(
                layout.separator_start(),
                layout.separator_end(),
                &Stroke::new(style.line_color(), SEPARATOR_LINE_WIDTH),
            );
            draw_label(
                &mut *surface,
                content.text(),
                style.font(),
                layout.text_anchor,
                style.fore_color(),
            );
            draw_icon(&mut *surface, content, style, &layout);
        }
        ToolTipVariant::Image => draw_icon(&mut *surface, content, style, &layout),
        ToolTipVariant::Text => draw_label(
            &mut *surface,
            content.text(),
            style.font(),
            layout.text_anchor,
            style.fore_color(),
        ),
    }

    trace!(target: targets::PAINT, "tooltip painted");
    layout
}

fn draw_label<R: Renderer>(
    renderer: &mut R,
    text: &str,
    font: &Font,
    anchor: Point,
    color: Color,
) {
    if !text.is_empty() {
        renderer.draw_text(text, font, anchor, color);
    }
}

fn draw_icon<R: Renderer>(
    renderer: &mut R,
    content: &ToolTipContent,
    style: &StyleConfig,
    layout: &LayoutState,
) {
    let Some(icon) = content.icon() else {
        return;
    };
    if style.icon_border() {
        renderer.stroke_rect(
            layout.icon_outline,
            &Stroke::new(style.border_color(), ICON_BORDER_WIDTH),
        );
    }
    renderer.draw_image(icon, layout.icon_rect, ImageScaleMode::Stretch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use visual_tooltip_render::{
        DrawCommand, FixedAdvanceMeasurer, Image, Paint, RecordingRenderer, Size, TextMeasurer,
        TextRenderingHint,
    };

    fn recorder() -> RecordingRenderer {
        RecordingRenderer::new(FixedAdvanceMeasurer::default())
    }

    fn texts(recorder: &RecordingRenderer) -> Vec<(String, Point, Color)> {
        recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    text,
                    origin,
                    color,
                    ..
                } => Some((text.clone(), *origin, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_state_is_balanced_and_clipped() {
        let mut r = recorder();
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        paint(
            &mut r,
            bounds,
            ToolTipVariant::Text,
            &ToolTipContent::new("hello"),
            &StyleConfig::default(),
        );

        let commands = r.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Save));
        assert_eq!(commands.get(1), Some(&DrawCommand::ClipRect(bounds)));
        assert_eq!(commands.last(), Some(&DrawCommand::Restore));
        assert_eq!(r.state_depth(), 0);
    }

    #[test]
    fn test_background_then_border() {
        let mut r = recorder();
        let bounds = Rect::new(10.0, 20.0, 100.0, 40.0);
        paint(
            &mut r,
            bounds,
            ToolTipVariant::Text,
            &ToolTipContent::new("hello"),
            &StyleConfig::default(),
        );

        let drawing: Vec<_> = r.drawing_commands().collect();
        match drawing[0] {
            DrawCommand::FillRect { rect, paint } => {
                assert_eq!(*rect, bounds);
                assert!(matches!(paint, Paint::LinearGradient(_)));
            }
            other => panic!("expected background fill, got {other:?}"),
        }
        match drawing[1] {
            DrawCommand::StrokeRect { rect, stroke } => {
                assert_eq!(*rect, Rect::new(10.0, 20.0, 99.0, 39.0));
                assert_eq!(stroke.width, 1.0);
            }
            other => panic!("expected border, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_border_is_skipped() {
        let mut r = recorder();
        let style = StyleConfig::default().with_border_visible(false);
        paint(
            &mut r,
            Rect::new(0.0, 0.0, 50.0, 20.0),
            ToolTipVariant::Text,
            &ToolTipContent::new("x"),
            &style,
        );

        assert!(
            !r.commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::StrokeRect { .. }))
        );
    }

    #[test]
    fn test_shadow_precedes_text() {
        let mut r = recorder();
        let style = StyleConfig::default().with_text_shadow(true);
        let layout = paint(
            &mut r,
            Rect::new(0.0, 0.0, 100.0, 40.0),
            ToolTipVariant::Text,
            &ToolTipContent::new("hello"),
            &style,
        );

        let texts = texts(&r);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].1, layout.text_anchor.offset(1.0, 1.0));
        assert_eq!(texts[0].2, Color::SILVER);
        assert_eq!(texts[1].1, layout.text_anchor);
        assert_eq!(texts[1].2, style.fore_color());
    }

    #[test]
    fn test_no_shadow_for_image_variant() {
        let mut r = recorder();
        let style = StyleConfig::default().with_text_shadow(true);
        paint(
            &mut r,
            Rect::new(0.0, 0.0, 33.0, 33.0),
            ToolTipVariant::Image,
            &ToolTipContent::new("ignored").with_icon(Image::solid(4, 4, Color::RED)),
            &style,
        );

        assert!(texts(&r).is_empty());
    }

    #[test]
    fn test_default_variant_order() {
        let mut r = recorder();
        let style = StyleConfig::default().with_icon_border(true);
        let content = ToolTipContent::new("Saved successfully")
            .with_title("Info")
            .with_icon(Image::solid(8, 8, Color::BLUE));
        let layout = paint(
            &mut r,
            Rect::new(0.0, 0.0, 200.0, 60.0),
            ToolTipVariant::Default,
            &content,
            &style,
        );

        let drawing: Vec<_> = r.drawing_commands().skip(2).collect();
        assert_eq!(drawing.len(), 5);
        assert!(matches!(drawing[0], DrawCommand::Text { text, .. } if text == "Info"));
        match drawing[1] {
            DrawCommand::Line { from, to, stroke } => {
                assert_eq!(*from, layout.separator.top_left());
                assert_eq!(*to, layout.separator.top_right());
                assert_eq!(stroke.paint, Paint::Solid(style.line_color()));
            }
            other => panic!("expected separator, got {other:?}"),
        }
        assert!(
            matches!(drawing[2], DrawCommand::Text { text, .. } if text == "Saved successfully")
        );
        assert!(matches!(
            drawing[3],
            DrawCommand::StrokeRect { rect, .. } if *rect == layout.icon_outline
        ));
        assert!(matches!(
            drawing[4],
            DrawCommand::Image { dest, scale_mode: ImageScaleMode::Stretch, .. }
                if *dest == layout.icon_rect
        ));
    }

    #[test]
    fn test_missing_icon_skips_icon_drawing() {
        let mut r = recorder();
        let style = StyleConfig::default().with_icon_border(true);
        paint(
            &mut r,
            Rect::new(0.0, 0.0, 33.0, 33.0),
            ToolTipVariant::Image,
            &ToolTipContent::default(),
            &style,
        );

        // Background and border only.
        assert_eq!(r.drawing_commands().count(), 2);
    }

    #[test]
    fn test_text_rendering_hint_applied() {
        let mut r = recorder();
        let style = StyleConfig::default()
            .with_text_rendering_hint(TextRenderingHint::AntiAlias);
        paint(
            &mut r,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            ToolTipVariant::Text,
            &ToolTipContent::default(),
            &style,
        );

        assert!(r.commands().contains(&DrawCommand::SetTextRendering(
            TextRenderingHint::AntiAlias
        )));
    }

    #[test]
    fn test_separator_line_is_one_pixel() {
        let mut r = recorder();
        let mut style = StyleConfig::default();
        style.set_separator_thickness(6.0).unwrap();
        let content = ToolTipContent::new("body").with_title("title");
        paint(
            &mut r,
            Rect::new(0.0, 0.0, 120.0, 60.0),
            ToolTipVariant::Default,
            &content,
            &style,
        );

        let widths: Vec<f32> = r
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { stroke, .. } => Some(stroke.width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![SEPARATOR_LINE_WIDTH]);
    }

    /// Records like [`RecordingRenderer`] but panics when asked to draw text.
    struct FailingText(RecordingRenderer);

    impl TextMeasurer for FailingText {
        fn measure(&mut self, text: &str, font: &Font) -> Size {
            self.0.measure(text, font)
        }
    }

    impl Renderer for FailingText {
        fn save(&mut self) {
            self.0.save();
        }

        fn restore(&mut self) {
            self.0.restore();
        }

        fn clip_rect(&mut self, rect: Rect) {
            self.0.clip_rect(rect);
        }

        fn clip_bounds(&self) -> Option<Rect> {
            self.0.clip_bounds()
        }

        fn set_text_rendering(&mut self, hint: TextRenderingHint) {
            self.0.set_text_rendering(hint);
        }

        fn text_rendering(&self) -> TextRenderingHint {
            self.0.text_rendering()
        }

        fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
            self.0.fill_rect(rect, paint);
        }

        fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
            self.0.stroke_rect(rect, stroke);
        }

        fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
            self.0.draw_line(from, to, stroke);
        }

        fn draw_text(&mut self, _text: &str, _font: &Font, _origin: Point, _color: Color) {
            panic!("text backend failed");
        }

        fn draw_image(&mut self, image: &Image, dest: Rect, scale_mode: ImageScaleMode) {
            self.0.draw_image(image, dest, scale_mode);
        }
    }

    #[test]
    fn test_state_restored_when_drawing_panics() {
        let mut r = FailingText(recorder());
        let result = catch_unwind(AssertUnwindSafe(|| {
            paint(
                &mut r,
                Rect::new(0.0, 0.0, 100.0, 40.0),
                ToolTipVariant::Text,
                &ToolTipContent::new("hello"),
                &StyleConfig::default(),
            )
        }));

        assert!(result.is_err());
        assert_eq!(r.0.state_depth(), 0);
        assert_eq!(r.0.commands().last(), Some(&DrawCommand::Restore));
    }
}
