//! Text measurement.

use cosmic_text::{Buffer, Metrics, Shaping};

use super::font::Font;
use crate::types::Size;

/// Line height as a multiple of the font size.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// Something that can report the rendered extent of a string.
///
/// Implementations must measure the empty string as [`Size::ZERO`]. Text
/// containing line breaks measures to the widest line by the total height of
/// all lines; no wrapping is applied.
pub trait TextMeasurer {
    /// Measure `text` as it would render in `font`.
    fn measure(&mut self, text: &str, font: &Font) -> Size;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        (**self).measure(text, font)
    }
}

/// Metrics derived from character counts.
///
/// Every character advances by `font.size() * advance` and every line is
/// `font.size() * line_height` tall, independent of the font family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    advance: f32,
    line_height: f32,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer with the given advance and line height factors.
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// Width of a single character in `font`.
    pub fn char_width(&self, font: &Font) -> f32 {
        font.size() * self.advance
    }

    /// Height of a single line in `font`.
    pub fn line_height(&self, font: &Font) -> f32 {
        font.size() * self.line_height
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.6, DEFAULT_LINE_HEIGHT)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.lines() {
            lines += 1;
            widest = widest.max(line.chars().count());
        }

        Size::new(
            widest as f32 * self.char_width(font),
            lines as f32 * self.line_height(font),
        )
    }
}

/// Measures text by shaping it with cosmic-text.
///
/// # Example
///
/// ```no_run
/// use visual_tooltip_render::text::{CosmicTextMeasurer, Font, TextMeasurer};
///
/// let mut measurer = CosmicTextMeasurer::new();
/// let size = measurer.measure("Saved successfully", &Font::default());
/// assert!(size.width > 0.0);
/// ```
pub struct CosmicTextMeasurer {
    font_system: cosmic_text::FontSystem,
    line_height: f32,
}

impl CosmicTextMeasurer {
    /// Create a measurer that loads the system fonts.
    ///
    /// Loading system fonts can take a noticeable amount of time; create one
    /// measurer and reuse it.
    pub fn new() -> Self {
        Self::with_font_system(cosmic_text::FontSystem::new())
    }

    /// Create a measurer with an empty font database.
    ///
    /// Load fonts with [`load_font_data`](Self::load_font_data) before use.
    pub fn without_system_fonts() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string());
        let db = fontdb::Database::new();
        Self::with_font_system(cosmic_text::FontSystem::new_with_locale_and_db(locale, db))
    }

    /// Wrap an existing cosmic-text font system.
    pub fn with_font_system(font_system: cosmic_text::FontSystem) -> Self {
        Self {
            font_system,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Set the line height as a multiple of the font size.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Load font data from memory (TTF, OTF, TTC or OTC).
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.font_system.db_mut().load_font_data(data);
    }

    /// Get mutable access to the underlying font system.
    pub fn font_system_mut(&mut self) -> &mut cosmic_text::FontSystem {
        &mut self.font_system
    }

    /// Shape `text` into an unbounded, unwrapped buffer.
    pub(crate) fn shape(&mut self, text: &str, font: &Font) -> Buffer {
        let metrics = Metrics::new(font.size(), font.size() * self.line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        buffer
    }
}

impl Default for CosmicTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CosmicTextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicTextMeasurer")
            .field("faces", &self.font_system.db().len())
            .field("line_height", &self.line_height)
            .finish()
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&mut self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let buffer = self.shape(text, font);

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        Size::new(width.ceil(), height.ceil())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{FontFamily, FontWeight};

    #[test]
    fn test_fixed_measurer_empty_is_zero() {
        let mut measurer = FixedAdvanceMeasurer::default();
        assert_eq!(measurer.measure("", &Font::default()), Size::ZERO);
    }

    #[test]
    fn test_fixed_measurer_single_line() {
        let mut measurer = FixedAdvanceMeasurer::new(0.5, 1.5);
        let font = Font::new(FontFamily::SansSerif, 10.0);
        assert_eq!(measurer.measure("Info", &font), Size::new(20.0, 15.0));
    }

    #[test]
    fn test_fixed_measurer_multi_line_uses_widest() {
        let mut measurer = FixedAdvanceMeasurer::new(0.5, 1.5);
        let font = Font::new(FontFamily::SansSerif, 10.0);
        assert_eq!(
            measurer.measure("ab\nabcdef\nabc", &font),
            Size::new(30.0, 45.0)
        );
    }

    #[test]
    fn test_fixed_measurer_ignores_weight() {
        let mut measurer = FixedAdvanceMeasurer::default();
        let font = Font::default();
        let bold = font.with_weight(FontWeight::BOLD);
        assert_eq!(measurer.measure("abc", &font), measurer.measure("abc", &bold));
    }

    #[test]
    fn test_cosmic_measurer_empty_without_fonts() {
        let mut measurer = CosmicTextMeasurer::without_system_fonts();
        assert_eq!(measurer.measure("", &Font::default()), Size::ZERO);
    }
}
