//! Font representation and configuration.

/// Font weight, typically ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Convert to cosmic-text Weight.
    pub fn to_cosmic(self) -> cosmic_text::Weight {
        cosmic_text::Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font style (normal, italic, or oblique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Normal upright style.
    #[default]
    Normal,
    /// Italic style (designed italic glyphs).
    Italic,
    /// Oblique style (slanted normal glyphs).
    Oblique,
}

impl FontStyle {
    /// Convert to cosmic-text Style.
    pub fn to_cosmic(self) -> cosmic_text::Style {
        match self {
            FontStyle::Normal => cosmic_text::Style::Normal,
            FontStyle::Italic => cosmic_text::Style::Italic,
            FontStyle::Oblique => cosmic_text::Style::Oblique,
        }
    }
}

/// A font family, either named or generic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A specific family name such as "Segoe UI".
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Convert to cosmic-text Family.
    pub fn to_cosmic(&self) -> cosmic_text::Family<'_> {
        match self {
            FontFamily::Name(name) => cosmic_text::Family::Name(name.as_str()),
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
        }
    }
}

/// A font specification: family, size, weight and style.
///
/// `Font` does not reference font data; a [`TextMeasurer`](super::TextMeasurer)
/// or renderer resolves it against whatever fonts it has loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Create a regular-weight font.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }

    /// Create a copy of this font with a different style.
    pub fn with_style(&self, style: FontStyle) -> Self {
        let mut font = self.clone();
        font.style = style;
        font
    }

    /// The same family and size with normal weight and upright style.
    pub fn regular(&self) -> Self {
        self.with_weight(FontWeight::NORMAL)
            .with_style(FontStyle::Normal)
    }

    /// Convert to cosmic-text Attrs for text shaping.
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
            .style(self.style.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 11.0)
    }
}

/// Quality hint for rasterizing glyphs.
///
/// The names follow the classic desktop text-rendering modes. Backends that
/// cannot honor a mode fall back to the nearest one they support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextRenderingHint {
    /// Whatever the backend uses by default.
    SystemDefault,
    /// Aliased glyphs snapped to the pixel grid.
    SingleBitPerPixelGridFit,
    /// Aliased glyphs.
    SingleBitPerPixel,
    /// Anti-aliased glyphs snapped to the pixel grid.
    AntiAliasGridFit,
    /// Anti-aliased glyphs.
    AntiAlias,
    /// Sub-pixel anti-aliasing snapped to the pixel grid.
    #[default]
    ClearTypeGridFit,
}

impl TextRenderingHint {
    /// Whether glyph edges are blended rather than thresholded.
    pub fn is_antialiased(self) -> bool {
        !matches!(
            self,
            TextRenderingHint::SingleBitPerPixel | TextRenderingHint::SingleBitPerPixelGridFit
        )
    }

    /// Whether glyph origins snap to whole pixels.
    pub fn is_grid_fit(self) -> bool {
        matches!(
            self,
            TextRenderingHint::SingleBitPerPixelGridFit
                | TextRenderingHint::AntiAliasGridFit
                | TextRenderingHint::ClearTypeGridFit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_variants() {
        let bold = Font::new(FontFamily::SansSerif, 12.0).with_weight(FontWeight::BOLD);
        assert_eq!(bold.weight(), FontWeight::BOLD);
        assert_eq!(bold.size(), 12.0);

        let italic = bold.with_style(FontStyle::Italic);
        let regular = italic.regular();
        assert_eq!(regular.weight(), FontWeight::NORMAL);
        assert_eq!(regular.style(), FontStyle::Normal);
        assert_eq!(regular.family(), &FontFamily::SansSerif);
        assert_eq!(regular.size(), 12.0);
    }

    #[test]
    fn test_weight_clamped() {
        assert_eq!(FontWeight::new(20), FontWeight(100));
        assert_eq!(FontWeight::new(2000).value(), 900);
    }

    #[test]
    fn test_rendering_hint_modes() {
        assert!(TextRenderingHint::default().is_antialiased());
        assert!(TextRenderingHint::default().is_grid_fit());
        assert!(!TextRenderingHint::SingleBitPerPixel.is_antialiased());
        assert!(!TextRenderingHint::SingleBitPerPixel.is_grid_fit());
        assert!(!TextRenderingHint::AntiAlias.is_grid_fit());
        assert!(TextRenderingHint::SystemDefault.is_antialiased());
    }
}
