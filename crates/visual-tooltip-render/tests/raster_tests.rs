//! Integration tests for CPU rasterization and display list replay.

use visual_tooltip_render::{
    Color, CosmicTextMeasurer, FixedAdvanceMeasurer, GradientBrush, Point, RasterRenderer, Rect,
    RecordingRenderer, Renderer, Stroke,
};

fn surface(width: u32, height: u32) -> RasterRenderer {
    RasterRenderer::with_measurer(width, height, CosmicTextMeasurer::without_system_fonts())
}

#[test]
fn test_vertical_gradient_fill() {
    let bounds = Rect::new(0.0, 0.0, 4.0, 11.0);
    let brush = GradientBrush::new(
        &[Color::WHITE, Color::BLACK],
        &[0.0, 1.0],
        0.0,
        bounds.top_right(),
        Point::new(bounds.right(), 10.0),
    )
    .expect("valid gradient");

    let mut r = surface(4, 11);
    r.fill_rect(bounds, brush.to_paint());

    assert_eq!(r.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(r.pixel(3, 10), Some(Color::BLACK));

    let mid = r.pixel(2, 5).expect("inside surface");
    assert!((mid.r - 0.5).abs() < 0.01, "mid = {mid:?}");
}

#[test]
fn test_replay_onto_raster() {
    let mut recorder = RecordingRenderer::new(FixedAdvanceMeasurer::default());
    recorder.save();
    recorder.clip_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
    recorder.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Color::BLUE);
    recorder.stroke_rect(Rect::new(0.0, 0.0, 7.0, 7.0), &Stroke::hairline(Color::RED));
    recorder.restore();

    let mut r = surface(16, 16);
    recorder.replay(&mut r);

    assert_eq!(r.pixel(0, 0), Some(Color::RED));
    assert_eq!(r.pixel(3, 3), Some(Color::BLUE));
    assert_eq!(r.pixel(7, 3), Some(Color::RED));
    assert_eq!(r.pixel(8, 8), Some(Color::TRANSPARENT));
    assert!(r.clip_bounds().is_none());
}

#[test]
fn test_into_image_dimensions() {
    let r = surface(5, 3);
    let image = r.into_image();
    assert_eq!(image.dimensions(), (5, 3));
}
