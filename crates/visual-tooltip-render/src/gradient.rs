//! Linear gradient brushes.
//!
//! A [`GradientBrush`] is built from parallel color and position arrays, an
//! angle and a start/end point pair. It is meant to serve a single fill and
//! is released when it goes out of scope.
//!
//! ```
//! use visual_tooltip_render::{Color, GradientBrush, Point};
//!
//! let brush = GradientBrush::new(
//!     &[Color::WHITE, Color::GRAY, Color::WHITE],
//!     &[0.0, 0.5, 1.0],
//!     0.0,
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 40.0),
//! )
//! .expect("valid gradient");
//!
//! assert_eq!(brush.color_at(Point::new(10.0, 20.0)), Color::GRAY);
//! ```

use tracing::trace;

use crate::error::{RenderError, RenderResult};
use crate::paint::{GradientStop, LinearGradient, Paint};
use crate::types::{Color, Point};

/// Check that `colors` and `positions` describe a usable gradient.
///
/// Requires at least two stops, one position per color, every position in
/// `[0, 1]`, ascending order, a first position of `0` and a last of `1`.
pub fn validate_stops(colors: &[Color], positions: &[f32]) -> RenderResult<()> {
    if colors.len() != positions.len() {
        return Err(RenderError::GradientLengthMismatch {
            colors: colors.len(),
            positions: positions.len(),
        });
    }
    if positions.len() < 2 {
        return Err(RenderError::GradientTooFewStops(positions.len()));
    }

    for (index, &value) in positions.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(RenderError::GradientStopOutOfRange { index, value });
        }
        if index > 0 && value < positions[index - 1] {
            return Err(RenderError::GradientStopsUnordered { index });
        }
    }

    let last = positions.len() - 1;
    if positions[0] != 0.0 {
        return Err(RenderError::GradientStopsUnordered { index: 0 });
    }
    if positions[last] != 1.0 {
        return Err(RenderError::GradientStopsUnordered { index: last });
    }

    Ok(())
}

/// A linear gradient brush for one fill operation.
#[derive(Debug)]
pub struct GradientBrush {
    gradient: LinearGradient,
    angle: f32,
}

impl GradientBrush {
    /// Build a brush from parallel color/position arrays.
    ///
    /// The gradient axis runs from `start` to `end`, rotated clockwise by
    /// `angle_degrees` around `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stops fail [`validate_stops`].
    pub fn new(
        colors: &[Color],
        positions: &[f32],
        angle_degrees: f32,
        start: Point,
        end: Point,
    ) -> RenderResult<Self> {
        validate_stops(colors, positions)?;

        let origin = start.to_vec2();
        let axis = end.to_vec2() - origin;
        let rotated = glam::Vec2::from_angle(angle_degrees.to_radians()).rotate(axis);

        let stops = colors
            .iter()
            .zip(positions)
            .map(|(&color, &offset)| GradientStop::new(offset, color))
            .collect();

        trace!(
            stops = colors.len(),
            angle = angle_degrees,
            "acquired gradient brush"
        );

        Ok(Self {
            gradient: LinearGradient {
                start,
                end: Point::from_vec2(origin + rotated),
                stops,
            },
            angle: angle_degrees,
        })
    }

    /// The resolved gradient (axis already rotated).
    #[inline]
    pub fn gradient(&self) -> &LinearGradient {
        &self.gradient
    }

    /// The rotation this brush was built with, in degrees.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Sample the brush at a point.
    #[inline]
    pub fn color_at(&self, point: Point) -> Color {
        self.gradient.color_at(point)
    }

    /// A paint that fills with this brush.
    pub fn to_paint(&self) -> Paint {
        Paint::LinearGradient(self.gradient.clone())
    }
}

impl Drop for GradientBrush {
    fn drop(&mut self) {
        trace!("released gradient brush");
    }
}

impl LinearGradient {
    /// Sample the gradient at a point.
    ///
    /// The point is projected onto the gradient axis; positions before the
    /// start or past the end take the first or last stop color.
    pub fn color_at(&self, point: Point) -> Color {
        if self.stops.is_empty() {
            return Color::TRANSPARENT;
        }

        let origin = self.start.to_vec2();
        let axis = self.end.to_vec2() - origin;
        let length_sq = axis.length_squared();
        if length_sq <= f32::EPSILON {
            return self.stops[0].color;
        }

        let t = (point.to_vec2() - origin).dot(axis) / length_sq;
        sample_stops(&self.stops, t)
    }
}

/// Sample sorted gradient stops at position t (0.0 to 1.0).
fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);

    // Find the two stops that bracket t
    let mut prev_stop = &stops[0];
    let mut next_stop = &stops[stops.len() - 1];

    for pair in stops.windows(2) {
        if pair[0].offset <= t && pair[1].offset >= t {
            prev_stop = &pair[0];
            next_stop = &pair[1];
            break;
        }
    }

    if t <= prev_stop.offset {
        return prev_stop.color;
    }
    if t >= next_stop.offset {
        return next_stop.color;
    }

    let range = next_stop.offset - prev_stop.offset;
    if range < 0.0001 {
        return prev_stop.color;
    }

    let factor = (t - prev_stop.offset) / range;
    prev_stop.color.lerp(next_stop.color, factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stop_brush(angle: f32) -> GradientBrush {
        GradientBrush::new(
            &[Color::RED, Color::GREEN, Color::BLUE],
            &[0.0, 0.5, 1.0],
            angle,
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let err = validate_stops(&[Color::RED, Color::BLUE], &[0.0, 0.5, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::GradientLengthMismatch {
                colors: 2,
                positions: 3
            }
        ));
    }

    #[test]
    fn test_validate_rejects_single_stop() {
        let err = validate_stops(&[Color::RED], &[0.0]).unwrap_err();
        assert!(matches!(err, RenderError::GradientTooFewStops(1)));
    }

    #[test]
    fn test_validate_rejects_bad_positions() {
        let colors = [Color::RED, Color::GREEN, Color::BLUE];
        assert!(matches!(
            validate_stops(&colors, &[0.0, 1.5, 1.0]),
            Err(RenderError::GradientStopOutOfRange { index: 1, .. })
        ));
        assert!(matches!(
            validate_stops(&colors, &[0.0, 0.8, 0.6]),
            Err(RenderError::GradientStopsUnordered { index: 2 })
        ));
        assert!(matches!(
            validate_stops(&colors, &[0.2, 0.5, 1.0]),
            Err(RenderError::GradientStopsUnordered { index: 0 })
        ));
        assert!(matches!(
            validate_stops(&colors, &[0.0, 0.5, 0.9]),
            Err(RenderError::GradientStopsUnordered { index: 2 })
        ));
        assert!(validate_stops(&colors, &[0.0, 0.5, 1.0]).is_ok());
        assert!(validate_stops(&colors, &[0.0, 0.0, 1.0]).is_ok());
    }

    #[test]
    fn test_brush_builder_rejects_mismatch() {
        let result = GradientBrush::new(
            &[Color::RED, Color::GREEN, Color::BLUE],
            &[0.0, 1.0],
            0.0,
            Point::ZERO,
            Point::new(0.0, 10.0),
        );
        assert!(matches!(
            result,
            Err(RenderError::GradientLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_vertical_brush_samples_along_y() {
        let brush = three_stop_brush(0.0);

        assert_eq!(brush.color_at(Point::new(0.0, 0.0)), Color::RED);
        assert_eq!(brush.color_at(Point::new(37.0, 50.0)), Color::GREEN);
        assert_eq!(brush.color_at(Point::new(100.0, 100.0)), Color::BLUE);

        // Clamped outside the axis
        assert_eq!(brush.color_at(Point::new(0.0, -20.0)), Color::RED);
        assert_eq!(brush.color_at(Point::new(0.0, 500.0)), Color::BLUE);

        let quarter = brush.color_at(Point::new(5.0, 25.0));
        assert!((quarter.r - 0.5).abs() < 0.001);
        assert!((quarter.g - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_rotated_brush_axis() {
        // A quarter turn clockwise maps a downward axis onto a leftward one.
        let brush = three_stop_brush(90.0);
        let end = brush.gradient().end;
        assert!((end.x - 0.0).abs() < 0.001);
        assert!((end.y - 0.0).abs() < 0.001);
        assert_eq!(brush.angle(), 90.0);

        let at_start = brush.color_at(Point::new(100.0, 80.0));
        assert!((at_start.r - 1.0).abs() < 0.001);
        let halfway = brush.color_at(Point::new(50.0, 80.0));
        assert!((halfway.g - 1.0).abs() < 0.001);
        assert!(halfway.r.abs() < 0.001);
    }

    #[test]
    fn test_degenerate_axis_uses_first_stop() {
        let brush = GradientBrush::new(
            &[Color::RED, Color::BLUE],
            &[0.0, 1.0],
            0.0,
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
        )
        .unwrap();
        assert_eq!(brush.color_at(Point::new(9.0, 9.0)), Color::RED);
    }

    #[test]
    fn test_to_paint_carries_stops() {
        let brush = three_stop_brush(0.0);
        match brush.to_paint() {
            Paint::LinearGradient(gradient) => {
                assert_eq!(gradient.stops.len(), 3);
                assert_eq!(gradient.stops[1], GradientStop::new(0.5, Color::GREEN));
            }
            other => panic!("expected gradient paint, got {other:?}"),
        }
    }
}
