//! Tooltip appearance configuration.
//!
//! [`StyleConfig`] holds every option the layout and paint phases read.
//! Values are validated when they are assigned, so a configuration that
//! reaches the paint pipeline is always drawable.
//!
//! # Example
//!
//! ```
//! use visual_tooltip::{Padding, StyleConfig, StyleError};
//!
//! let mut style = StyleConfig::default()
//!     .with_text_shadow(true)
//!     .with_icon_border(true);
//!
//! style.set_padding(Padding::uniform(6.0)).unwrap();
//!
//! // Out of range; the previous thickness is kept.
//! assert!(matches!(
//!     style.set_border_thickness(30),
//!     Err(StyleError::BorderThicknessOutOfRange { .. })
//! ));
//! assert_eq!(style.border_thickness(), 1);
//! ```

use tracing::warn;
use visual_tooltip_render::{Color, Font, FontFamily, FontWeight, Size, TextRenderingHint};

use crate::error::{StyleError, StyleResult};
use crate::targets;

/// Smallest accepted border thickness.
pub const MIN_BORDER_THICKNESS: u32 = 1;

/// Largest accepted border thickness.
pub const MAX_BORDER_THICKNESS: u32 = 24;

/// Point size of the default title and body fonts.
pub const DEFAULT_FONT_SIZE: f32 = 8.25;

/// Space reserved on each side of the tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// Create padding from its four sides.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn sides(&self) -> [(&'static str, f32); 4] {
        [
            ("padding.left", self.left),
            ("padding.top", self.top),
            ("padding.right", self.right),
            ("padding.bottom", self.bottom),
        ]
    }
}

/// Visual options for a tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    background_colors: Vec<Color>,
    gradient_positions: Vec<f32>,
    gradient_angle: f32,

    border_color: Color,
    border_thickness: u32,
    border_visible: bool,

    title_font: Font,
    title_color: Color,
    font: Font,
    fore_color: Color,

    line_color: Color,
    separator_thickness: f32,

    icon_size: Size,
    icon_border: bool,
    text_shadow: bool,

    padding: Padding,
    spacing: f32,
    text_rendering_hint: TextRenderingHint,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let base = Color::from_rgb8(243, 243, 243);
        let border = Color::from_rgb8(180, 180, 180);
        let font = Font::new(FontFamily::SansSerif, DEFAULT_FONT_SIZE);

        Self {
            background_colors: vec![base.light(), base, base.light()],
            gradient_positions: vec![0.0, 0.5, 1.0],
            gradient_angle: 0.0,
            border_color: border,
            border_thickness: MIN_BORDER_THICKNESS,
            border_visible: true,
            title_font: font.with_weight(FontWeight::BOLD),
            title_color: Color::GRAY,
            font,
            fore_color: Color::from_rgb8(64, 64, 64),
            line_color: border,
            separator_thickness: 1.0,
            icon_size: Size::new(24.0, 24.0),
            icon_border: false,
            text_shadow: false,
            padding: Padding::uniform(4.0),
            spacing: 2.0,
            text_rendering_hint: TextRenderingHint::ClearTypeGridFit,
        }
    }
}

impl StyleConfig {
    /// Create a configuration with the default look.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Background
    // =========================================================================

    /// Background gradient colors.
    pub fn background_colors(&self) -> &[Color] {
        &self.background_colors
    }

    /// Background gradient stop positions.
    pub fn gradient_positions(&self) -> &[f32] {
        &self.gradient_positions
    }

    /// Replace the background gradient.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Gradient`] if the colors and positions do not
    /// describe a valid gradient.
    pub fn set_background_gradient(
        &mut self,
        colors: Vec<Color>,
        positions: Vec<f32>,
    ) -> StyleResult<()> {
        if let Err(err) = visual_tooltip_render::validate_stops(&colors, &positions) {
            warn!(target: targets::STYLE, %err, "rejected background gradient");
            return Err(err.into());
        }
        self.background_colors = colors;
        self.gradient_positions = positions;
        Ok(())
    }

    /// Replace the background colors, keeping the current positions.
    pub fn set_background_colors(&mut self, colors: Vec<Color>) -> StyleResult<()> {
        let positions = self.gradient_positions.clone();
        self.set_background_gradient(colors, positions)
    }

    /// Replace the stop positions, keeping the current colors.
    pub fn set_gradient_positions(&mut self, positions: Vec<f32>) -> StyleResult<()> {
        let colors = self.background_colors.clone();
        self.set_background_gradient(colors, positions)
    }

    /// Rotation of the background gradient, in degrees.
    pub fn gradient_angle(&self) -> f32 {
        self.gradient_angle
    }

    /// Set the background gradient rotation in degrees.
    pub fn set_gradient_angle(&mut self, degrees: f32) {
        self.gradient_angle = degrees;
    }

    /// Set the background gradient rotation using builder pattern.
    pub fn with_gradient_angle(mut self, degrees: f32) -> Self {
        self.gradient_angle = degrees;
        self
    }

    // =========================================================================
    // Border
    // =========================================================================

    /// Border color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Set the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    /// Set the border color using builder pattern.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Border thickness in pixels.
    pub fn border_thickness(&self) -> u32 {
        self.border_thickness
    }

    /// Set the border thickness.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::BorderThicknessOutOfRange`] unless `thickness`
    /// lies in [`MIN_BORDER_THICKNESS`]`..=`[`MAX_BORDER_THICKNESS`].
    pub fn set_border_thickness(&mut self, thickness: u32) -> StyleResult<()> {
        if !(MIN_BORDER_THICKNESS..=MAX_BORDER_THICKNESS).contains(&thickness) {
            warn!(
                target: targets::STYLE,
                thickness,
                current = self.border_thickness,
                "rejected border thickness"
            );
            return Err(StyleError::BorderThicknessOutOfRange {
                value: thickness,
                min: MIN_BORDER_THICKNESS,
                max: MAX_BORDER_THICKNESS,
            });
        }
        self.border_thickness = thickness;
        Ok(())
    }

    /// Whether the border is drawn.
    pub fn border_visible(&self) -> bool {
        self.border_visible
    }

    /// Show or hide the border.
    pub fn set_border_visible(&mut self, visible: bool) {
        self.border_visible = visible;
    }

    /// Show or hide the border using builder pattern.
    pub fn with_border_visible(mut self, visible: bool) -> Self {
        self.border_visible = visible;
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Font of the title line.
    pub fn title_font(&self) -> &Font {
        &self.title_font
    }

    /// Set the title font.
    pub fn set_title_font(&mut self, font: Font) {
        self.title_font = font;
    }

    /// Set the title font using builder pattern.
    pub fn with_title_font(mut self, font: Font) -> Self {
        self.title_font = font;
        self
    }

    /// Color of the title line.
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    /// Set the title color.
    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    /// Set the title color using builder pattern.
    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    /// Font of the body text.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the body font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Set the body font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Color of the body text.
    pub fn fore_color(&self) -> Color {
        self.fore_color
    }

    /// Set the body text color.
    pub fn set_fore_color(&mut self, color: Color) {
        self.fore_color = color;
    }

    /// Set the body text color using builder pattern.
    pub fn with_fore_color(mut self, color: Color) -> Self {
        self.fore_color = color;
        self
    }

    /// Whether a silver shadow is drawn under the body text.
    pub fn text_shadow(&self) -> bool {
        self.text_shadow
    }

    /// Enable or disable the body text shadow.
    pub fn set_text_shadow(&mut self, enabled: bool) {
        self.text_shadow = enabled;
    }

    /// Enable or disable the body text shadow using builder pattern.
    pub fn with_text_shadow(mut self, enabled: bool) -> Self {
        self.text_shadow = enabled;
        self
    }

    /// Quality hint applied to the surface before any text is drawn.
    pub fn text_rendering_hint(&self) -> TextRenderingHint {
        self.text_rendering_hint
    }

    /// Set the text rendering hint.
    pub fn set_text_rendering_hint(&mut self, hint: TextRenderingHint) {
        self.text_rendering_hint = hint;
    }

    /// Set the text rendering hint using builder pattern.
    pub fn with_text_rendering_hint(mut self, hint: TextRenderingHint) -> Self {
        self.text_rendering_hint = hint;
        self
    }

    // =========================================================================
    // Separator
    // =========================================================================

    /// Color of the separator line.
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    /// Set the separator line color.
    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    /// Set the separator line color using builder pattern.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Vertical space the separator reserves between title and body.
    pub fn separator_thickness(&self) -> f32 {
        self.separator_thickness
    }

    /// Set the space the separator reserves.
    pub fn set_separator_thickness(&mut self, thickness: f32) -> StyleResult<()> {
        check_non_negative("separator_thickness", thickness)?;
        self.separator_thickness = thickness;
        Ok(())
    }

    // =========================================================================
    // Icon
    // =========================================================================

    /// Size every icon is stretched to.
    pub fn icon_size(&self) -> Size {
        self.icon_size
    }

    /// Set the icon size.
    pub fn set_icon_size(&mut self, size: Size) -> StyleResult<()> {
        check_non_negative("icon_size.width", size.width)?;
        check_non_negative("icon_size.height", size.height)?;
        self.icon_size = size;
        Ok(())
    }

    /// Whether an outline is drawn around the icon.
    pub fn icon_border(&self) -> bool {
        self.icon_border
    }

    /// Enable or disable the icon outline.
    pub fn set_icon_border(&mut self, enabled: bool) {
        self.icon_border = enabled;
    }

    /// Enable or disable the icon outline using builder pattern.
    pub fn with_icon_border(mut self, enabled: bool) -> Self {
        self.icon_border = enabled;
        self
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Space around the content.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Set the padding.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NegativeValue`] naming the first negative side.
    pub fn set_padding(&mut self, padding: Padding) -> StyleResult<()> {
        for (property, value) in padding.sides() {
            check_non_negative(property, value)?;
        }
        self.padding = padding;
        Ok(())
    }

    /// Gap between neighbouring elements.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Set the gap between neighbouring elements.
    pub fn set_spacing(&mut self, spacing: f32) -> StyleResult<()> {
        check_non_negative("spacing", spacing)?;
        self.spacing = spacing;
        Ok(())
    }
}

fn check_non_negative(property: &'static str, value: f32) -> StyleResult<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    warn!(target: targets::STYLE, property, value, "rejected negative length");
    Err(StyleError::NegativeValue { property, value })
}
