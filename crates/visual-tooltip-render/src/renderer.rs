//! Core renderer trait defining the popup drawing surface.
//!
//! This module defines the [`Renderer`] trait which provides the small set of
//! 2D drawing operations a tooltip needs. Every renderer is also a
//! [`TextMeasurer`], so layout can be derived from the same surface that will
//! draw it.

use crate::image::{Image, ImageScaleMode};
use crate::paint::{Paint, Stroke};
use crate::text::{Font, TextMeasurer, TextRenderingHint};
use crate::types::{Color, Point, Rect, Size};

/// The 2D drawing surface of a popup.
///
/// # State Stack
///
/// The renderer maintains a state stack that can be saved and restored. It
/// holds the clip region and the text rendering hint.
///
/// ```ignore
/// renderer.save();
/// renderer.clip_rect(bounds);
/// renderer.fill_rect(bounds, Color::WHITE);
/// renderer.restore();
/// ```
pub trait Renderer: TextMeasurer {
    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state (clip, text rendering hint).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Intersect the clip region with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Get the current clip bounds, if any.
    fn clip_bounds(&self) -> Option<Rect>;

    /// Set the quality hint used for subsequent text drawing.
    fn set_text_rendering(&mut self, hint: TextRenderingHint);

    /// Get the current text rendering hint.
    fn text_rendering(&self) -> TextRenderingHint;

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle with the specified paint.
    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>);

    /// Stroke the outline of a rectangle.
    ///
    /// The stroke is centered on the rectangle's edges.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a single run of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, color: Color);

    /// Draw an image into the destination rectangle.
    fn draw_image(&mut self, image: &Image, dest: Rect, scale_mode: ImageScaleMode);
}

/// Saved renderer state for save/restore operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderState {
    /// Clip rect at this state.
    pub clip: Option<Rect>,
    /// Text rendering hint at this state.
    pub text_rendering: TextRenderingHint,
}

/// Common state management for renderers.
///
/// This struct provides a reusable implementation of save/restore and clip
/// handling that renderer implementations can use.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    /// Stack of saved states.
    stack: Vec<RenderState>,
    /// Current state.
    current: RenderState,
}

impl RenderStateStack {
    /// Create a new state stack with default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    #[inline]
    pub fn current(&self) -> &RenderState {
        &self.current
    }

    /// Save the current state.
    pub fn save(&mut self) {
        self.stack.push(self.current.clone());
    }

    /// Restore the previously saved state.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.current = state;
        }
    }

    /// Reset to default state and clear the stack.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.current = RenderState::default();
    }

    /// Set a clip rect, intersecting with any existing clip.
    ///
    /// Disjoint clips collapse to an empty rectangle so nothing draws.
    pub fn clip_rect(&mut self, rect: Rect) {
        self.current.clip = match self.current.clip {
            Some(existing) => Some(
                existing
                    .intersect(&rect)
                    .unwrap_or(Rect::from_origin_size(rect.origin, Size::ZERO)),
            ),
            None => Some(rect),
        };
    }

    /// Get the current clip bounds.
    #[inline]
    pub fn clip_bounds(&self) -> Option<Rect> {
        self.current.clip
    }

    /// Set the text rendering hint.
    #[inline]
    pub fn set_text_rendering(&mut self, hint: TextRenderingHint) {
        self.current.text_rendering = hint;
    }

    /// Get the text rendering hint.
    #[inline]
    pub fn text_rendering(&self) -> TextRenderingHint {
        self.current.text_rendering
    }

    /// Get the stack depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_default() {
        let state = RenderState::default();
        assert!(state.clip.is_none());
        assert_eq!(state.text_rendering, TextRenderingHint::ClearTypeGridFit);
    }

    #[test]
    fn test_render_state_stack() {
        let mut stack = RenderStateStack::new();

        stack.set_text_rendering(TextRenderingHint::AntiAlias);
        stack.save();
        stack.set_text_rendering(TextRenderingHint::SingleBitPerPixel);
        stack.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(stack.depth(), 1);

        stack.restore();

        assert_eq!(stack.text_rendering(), TextRenderingHint::AntiAlias);
        assert!(stack.clip_bounds().is_none());
        assert_eq!(stack.depth(), 0);

        // Unbalanced restore is a no-op
        stack.restore();
        assert_eq!(stack.text_rendering(), TextRenderingHint::AntiAlias);
    }

    #[test]
    fn test_clip_intersection() {
        let mut stack = RenderStateStack::new();

        stack.clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(stack.clip_bounds(), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));

        stack.clip_rect(Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(stack.clip_bounds(), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));

        stack.clip_rect(Rect::new(500.0, 500.0, 10.0, 10.0));
        assert!(stack.clip_bounds().unwrap().is_empty());
    }
}
