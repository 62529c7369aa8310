//! A renderer that records drawing commands into a display list.
//!
//! [`RecordingRenderer`] is the backend for hosts that own their own canvas:
//! paint into the recorder, then [`replay`](RecordingRenderer::replay) the
//! list onto the real surface, or inspect the commands directly.

use crate::image::{Image, ImageScaleMode};
use crate::paint::{Paint, Stroke};
use crate::renderer::{RenderStateStack, Renderer};
use crate::text::{FixedAdvanceMeasurer, Font, TextMeasurer, TextRenderingHint};
use crate::types::{Color, Point, Rect, Size};

/// A single recorded operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `Renderer::save`.
    Save,
    /// `Renderer::restore`.
    Restore,
    /// `Renderer::clip_rect`.
    ClipRect(Rect),
    /// `Renderer::set_text_rendering`.
    SetTextRendering(TextRenderingHint),
    /// `Renderer::fill_rect`.
    FillRect { rect: Rect, paint: Paint },
    /// `Renderer::stroke_rect`.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// `Renderer::draw_line`.
    Line { from: Point, to: Point, stroke: Stroke },
    /// `Renderer::draw_text`.
    Text {
        text: String,
        font: Font,
        origin: Point,
        color: Color,
    },
    /// `Renderer::draw_image`.
    Image {
        image: Image,
        dest: Rect,
        scale_mode: ImageScaleMode,
    },
}

impl DrawCommand {
    /// Whether this command puts pixels on the surface.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            DrawCommand::FillRect { .. }
                | DrawCommand::StrokeRect { .. }
                | DrawCommand::Line { .. }
                | DrawCommand::Text { .. }
                | DrawCommand::Image { .. }
        )
    }
}

/// Records every renderer call, measuring text with `M`.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer<M = FixedAdvanceMeasurer> {
    measurer: M,
    state: RenderStateStack,
    commands: Vec<DrawCommand>,
}

impl<M: TextMeasurer> RecordingRenderer<M> {
    /// Create an empty recorder.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            state: RenderStateStack::new(),
            commands: Vec::new(),
        }
    }

    /// The recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the commands that draw, in call order.
    pub fn drawing_commands(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(|c| c.is_drawing())
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget all commands and reset the state stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.state.reset();
    }

    /// Current save/restore nesting depth.
    pub fn state_depth(&self) -> usize {
        self.state.depth()
    }

    /// Get mutable access to the measurer.
    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    /// Issue every recorded command against another renderer.
    pub fn replay<R: Renderer>(&self, target: &mut R) {
        for command in &self.commands {
            match command {
                DrawCommand::Save => target.save(),
                DrawCommand::Restore => target.restore(),
                DrawCommand::ClipRect(rect) => target.clip_rect(*rect),
                DrawCommand::SetTextRendering(hint) => target.set_text_rendering(*hint),
                DrawCommand::FillRect { rect, paint } => target.fill_rect(*rect, paint),
                DrawCommand::StrokeRect { rect, stroke } => target.stroke_rect(*rect, stroke),
                DrawCommand::Line { from, to, stroke } => target.draw_line(*from, *to, stroke),
                DrawCommand::Text {
                    text,
                    font,
                    origin,
                    color,
                } => target.draw_text(text, font, *origin, *color),
                DrawCommand::Image {
                    image,
                    dest,
                    scale_mode,
                } => target.draw_image(image, *dest, *scale_mode),
            }
        }
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingRenderer<M> {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        self.measurer.measure(text, font)
    }
}

impl<M: TextMeasurer> Renderer for RecordingRenderer<M> {
    fn save(&mut self) {
        self.state.save();
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.state.restore();
        self.commands.push(DrawCommand::Restore);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip_rect(rect);
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.state.clip_bounds()
    }

    fn set_text_rendering(&mut self, hint: TextRenderingHint) {
        self.state.set_text_rendering(hint);
        self.commands.push(DrawCommand::SetTextRendering(hint));
    }

    fn text_rendering(&self) -> TextRenderingHint {
        self.state.text_rendering()
    }

    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: paint.into(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: stroke.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            font: font.clone(),
            origin,
            color,
        });
    }

    fn draw_image(&mut self, image: &Image, dest: Rect, scale_mode: ImageScaleMode) {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            dest,
            scale_mode,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut recorder = RecordingRenderer::new(FixedAdvanceMeasurer::default());
        recorder.save();
        recorder.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        recorder.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        recorder.draw_line(Point::ZERO, Point::new(5.0, 0.0), &Stroke::hairline(Color::BLUE));
        recorder.restore();

        assert_eq!(recorder.commands().len(), 5);
        assert_eq!(recorder.commands()[0], DrawCommand::Save);
        assert_eq!(recorder.drawing_commands().count(), 2);
        assert_eq!(recorder.state_depth(), 0);
        assert!(recorder.clip_bounds().is_none());
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let mut source = RecordingRenderer::new(FixedAdvanceMeasurer::default());
        source.set_text_rendering(TextRenderingHint::AntiAlias);
        source.draw_text("hi", &Font::default(), Point::new(1.0, 2.0), Color::BLACK);
        source.draw_image(
            &Image::solid(2, 2, Color::GREEN),
            Rect::new(0.0, 0.0, 4.0, 4.0),
            ImageScaleMode::Stretch,
        );

        let mut target = RecordingRenderer::new(FixedAdvanceMeasurer::default());
        source.replay(&mut target);

        assert_eq!(source.commands(), target.commands());
        assert_eq!(target.text_rendering(), TextRenderingHint::AntiAlias);
    }

    #[test]
    fn test_take_and_clear() {
        let mut recorder = RecordingRenderer::new(FixedAdvanceMeasurer::default());
        recorder.save();
        recorder.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        let taken = recorder.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(recorder.commands().is_empty());

        recorder.clear();
        assert_eq!(recorder.state_depth(), 0);
    }
}
