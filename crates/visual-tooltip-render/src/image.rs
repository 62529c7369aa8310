//! Icon images.
//!
//! Images are decoded once into an RGBA pixel buffer and shared cheaply
//! between tooltip content and renderers.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Rect, Size};

/// A decoded RGBA image.
#[derive(Clone)]
pub struct Image {
    pixels: Arc<RgbaImage>,
}

impl Image {
    /// Wrap an already decoded pixel buffer.
    pub fn from_rgba_image(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Create an image from raw straight-alpha RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidImageDimensions`] if `data` is not
    /// exactly `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> RenderResult<Self> {
        RgbaImage::from_raw(width, height, data)
            .map(Self::from_rgba_image)
            .ok_or(RenderError::InvalidImageDimensions { width, height })
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_rgba_image(decoded.to_rgba8()))
    }

    /// Load and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let decoded = image::open(path)?;
        Ok(Self::from_rgba_image(decoded.to_rgba8()))
    }

    /// Create an image filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let rgba = image::Rgba(color.to_rgba8());
        Self::from_rgba_image(RgbaImage::from_pixel(width, height, rgba))
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Borrow the pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether two handles share the same pixel buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.pixels == *other.pixels
    }
}

/// How to scale an image when rendering to a different size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Stretch the image to fill the destination rectangle.
    /// This may distort the image's aspect ratio.
    #[default]
    Stretch,
}

impl ImageScaleMode {
    /// The rectangle an image actually covers inside `dest`.
    pub fn target_rect(self, dest: Rect) -> Rect {
        match self {
            ImageScaleMode::Stretch => dest,
        }
    }
}
