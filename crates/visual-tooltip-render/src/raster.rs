//! CPU rasterization onto an RGBA pixel buffer.
//!
//! [`RasterRenderer`] paints into an [`image::RgbaImage`]. It is meant for
//! off-screen tooltip snapshots and for hosts that blit a finished bitmap
//! onto their popup window.
//!
//! Pixel `(i, j)` is sampled at the integer coordinate `(i, j)`, so a one
//! pixel line at `y = 20` covers exactly row 20 and a rectangle covers the
//! half-open range `[left, right) x [top, bottom)`.
//!
//! Strokes and lines are anti-aliased: a pixel's coverage falls off over one
//! pixel past the stroke edge, so fractional positions blend into their
//! neighbours instead of snapping.

use cosmic_text::SwashCache;
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::image::{Image, ImageScaleMode};
use crate::paint::{Paint, Stroke};
use crate::renderer::{RenderStateStack, Renderer};
use crate::text::{CosmicTextMeasurer, Font, TextMeasurer, TextRenderingHint};
use crate::types::{Color, Point, Rect, Size};

/// Coverage below which single-bit text modes drop a glyph pixel.
const SINGLE_BIT_THRESHOLD: u8 = 128;

/// Renders into an owned RGBA pixel buffer.
pub struct RasterRenderer {
    target: RgbaImage,
    text: CosmicTextMeasurer,
    swash_cache: SwashCache,
    state: RenderStateStack,
}

impl RasterRenderer {
    /// Create a transparent surface, loading system fonts for text.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_measurer(width, height, CosmicTextMeasurer::new())
    }

    /// Create a transparent surface that shapes text with `text`.
    pub fn with_measurer(width: u32, height: u32, text: CosmicTextMeasurer) -> Self {
        debug!(width, height, "created raster surface");
        Self {
            target: RgbaImage::new(width, height),
            text,
            swash_cache: SwashCache::new(),
            state: RenderStateStack::new(),
        }
    }

    /// The surface size in pixels.
    pub fn size(&self) -> Size {
        Size::from((self.target.width(), self.target.height()))
    }

    /// Borrow the pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.target
    }

    /// Consume the renderer and return the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    /// Read back a pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.target
            .get_pixel_checked(x, y)
            .map(|p| Color::from_rgba8_array(p.0))
    }

    /// Clear every pixel to `color`, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        let rgba = Rgba(color.to_rgba8());
        for pixel in self.target.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Integer pixel range covered by `rect`, clipped to surface and clip.
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        span(&self.target, self.state.clip_bounds(), rect)
    }

    /// Blend `paint` into `bounds`, weighted by `coverage` at each sample.
    fn fill_coverage(
        &mut self,
        bounds: Rect,
        paint: &Paint,
        coverage: impl Fn(glam::Vec2) -> f32,
    ) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(bounds) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let sample = Point::new(x as f32, y as f32);
                let weight = coverage(sample.to_vec2());
                if weight > 0.0 {
                    let color = paint.color_at(sample).scale_alpha(weight.min(1.0));
                    blend(&mut self.target, x, y, color);
                }
            }
        }
    }
}

impl std::fmt::Debug for RasterRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterRenderer")
            .field("width", &self.target.width())
            .field("height", &self.target.height())
            .field("state", &self.state)
            .finish()
    }
}

impl TextMeasurer for RasterRenderer {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        self.text.measure(text, font)
    }
}

impl Renderer for RasterRenderer {
    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.clip_rect(rect);
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.state.clip_bounds()
    }

    fn set_text_rendering(&mut self, hint: TextRenderingHint) {
        self.state.set_text_rendering(hint);
    }

    fn text_rendering(&self) -> TextRenderingHint {
        self.state.text_rendering()
    }

    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let paint = paint.into();
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let color = paint.color_at(Point::new(x as f32, y as f32));
                blend(&mut self.target, x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let half = stroke.width / 2.0;
        let corners = [
            rect.top_left().to_vec2(),
            rect.top_right().to_vec2(),
            rect.bottom_right().to_vec2(),
            glam::Vec2::new(rect.left(), rect.bottom()),
        ];
        let outer = Rect::new(
            rect.left() - half - 1.0,
            rect.top() - half - 1.0,
            rect.width() + stroke.width + 2.0,
            rect.height() + stroke.width + 2.0,
        );
        self.fill_coverage(outer, &stroke.paint, |p| {
            let distance = (0..4)
                .map(|i| segment_distance(p, corners[i], corners[(i + 1) % 4]))
                .fold(f32::INFINITY, f32::min);
            edge_coverage(distance, half)
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let half = stroke.width / 2.0;
        let (a, b) = (from.to_vec2(), to.to_vec2());
        let min = a.min(b) - glam::Vec2::splat(half + 1.0);
        let max = a.max(b) + glam::Vec2::splat(half + 1.0);
        let bounds = Rect::from_corners(Point::from_vec2(min), Point::from_vec2(max));
        self.fill_coverage(bounds, &stroke.paint, |p| {
            edge_coverage(segment_distance(p, a, b), half)
        });
    }

    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, color: Color) {
        if text.is_empty() {
            return;
        }

        let hint = self.state.text_rendering();
        let origin = if hint.is_grid_fit() {
            Point::new(origin.x.round(), origin.y.round())
        } else {
            origin
        };
        let clip = self.state.clip_bounds();
        let buffer = self.text.shape(text, font);

        let [r, g, b, a] = color.to_rgba8();
        let Self {
            target,
            text: measurer,
            swash_cache,
            ..
        } = self;

        buffer.draw(
            measurer.font_system_mut(),
            swash_cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |x, y, w, h, glyph_color| {
                let coverage = if hint.is_antialiased() {
                    glyph_color.a()
                } else if glyph_color.a() >= SINGLE_BIT_THRESHOLD {
                    255
                } else {
                    return;
                };
                let pixel = Color::from_rgba8(
                    glyph_color.r(),
                    glyph_color.g(),
                    glyph_color.b(),
                    coverage,
                );
                let area = Rect::new(
                    origin.x + x as f32,
                    origin.y + y as f32,
                    w as f32,
                    h as f32,
                );
                if let Some((x0, y0, x1, y1)) = span(target, clip, area) {
                    for py in y0..y1 {
                        for px in x0..x1 {
                            blend(target, px, py, pixel);
                        }
                    }
                }
            },
        );
    }

    fn draw_image(&mut self, image: &Image, dest: Rect, scale_mode: ImageScaleMode) {
        let area = scale_mode.target_rect(dest);
        if area.is_empty() || image.width() == 0 || image.height() == 0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.pixel_span(area) else {
            return;
        };

        let source = image.pixels();
        let scale_x = image.width() as f32 / area.width();
        let scale_y = image.height() as f32 / area.height();
        for y in y0..y1 {
            let sy = (((y as f32 - area.top()) * scale_y) as u32).min(image.height() - 1);
            for x in x0..x1 {
                let sx = (((x as f32 - area.left()) * scale_x) as u32).min(image.width() - 1);
                let color = Color::from_rgba8_array(source.get_pixel(sx, sy).0);
                blend(&mut self.target, x, y, color);
            }
        }
    }
}

/// Half-open integer pixel range of `rect` inside the surface and clip.
fn span(target: &RgbaImage, clip: Option<Rect>, rect: Rect) -> Option<(u32, u32, u32, u32)> {
    let surface = Rect::new(0.0, 0.0, target.width() as f32, target.height() as f32);
    let mut area = rect.intersect(&surface)?;
    if let Some(clip) = clip {
        area = area.intersect(&clip)?;
    }

    let x0 = area.left().ceil().max(0.0) as u32;
    let y0 = area.top().ceil().max(0.0) as u32;
    let x1 = (area.right().ceil() as u32).min(target.width());
    let y1 = (area.bottom().ceil() as u32).min(target.height());
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Composite a premultiplied color over the pixel at `(x, y)`.
fn blend(target: &mut RgbaImage, x: u32, y: u32, color: Color) {
    if color.a <= 0.0 {
        return;
    }
    let pixel = target.get_pixel_mut(x, y);
    let dst = Color::from_rgba8_array(pixel.0);
    pixel.0 = color.over(dst).to_rgba8();
}

/// Coverage of a sample `distance` away from the centre of a stroke whose
/// half width is `half`.
fn edge_coverage(distance: f32, half: f32) -> f32 {
    (half + 0.5 - distance).clamp(0.0, 1.0)
}

/// Distance from `p` to the segment `a -> b`.
fn segment_distance(p: glam::Vec2, a: glam::Vec2, b: glam::Vec2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
