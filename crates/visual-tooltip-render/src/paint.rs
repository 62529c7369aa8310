//! Paint styles for filling and stroking shapes.

use crate::types::{Color, Point};

/// A paint style for filling shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
    /// Linear gradient fill.
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Resolve the color this paint produces at `point`.
    pub fn color_at(&self, point: Point) -> Color {
        match self {
            Self::Solid(c) => *c,
            Self::LinearGradient(gradient) => gradient.color_at(point),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<&Paint> for Paint {
    fn from(paint: &Paint) -> Self {
        paint.clone()
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

/// A linear gradient definition.
///
/// Colors are constant along lines perpendicular to `start -> end` and clamp
/// to the first/last stop outside the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Start point of the gradient.
    pub start: Point,
    /// End point of the gradient.
    pub end: Point,
    /// Color stops, sorted by offset.
    pub stops: Vec<GradientStop>,
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0).
    pub offset: f32,
    /// Color at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stroke style options.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke paint (color or gradient).
    pub paint: Paint,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            paint: Paint::Solid(Color::BLACK),
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given paint and width.
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }

    /// A one pixel wide stroke of a solid color.
    #[inline]
    pub fn hairline(color: Color) -> Self {
        Self::new(color, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_solid() {
        let paint: Paint = Color::RED.into();
        assert_eq!(paint, Paint::Solid(Color::RED));
        assert_eq!(paint.color_at(Point::new(42.0, -3.0)), Color::RED);
    }

    #[test]
    fn test_stroke_defaults() {
        let stroke = Stroke::hairline(Color::BLUE);
        assert_eq!(stroke.width, 1.0);
        assert_eq!(stroke.paint, Paint::Solid(Color::BLUE));
        assert_eq!(Stroke::default().paint, Paint::Solid(Color::BLACK));
    }
}
