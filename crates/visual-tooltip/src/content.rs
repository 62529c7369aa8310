//! What a tooltip shows.

use visual_tooltip_render::Image;

/// Which elements a tooltip lays out and draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolTipVariant {
    /// Title, separator line, body text and an optional icon.
    #[default]
    Default,
    /// The icon alone.
    Image,
    /// The body text alone.
    Text,
}

impl ToolTipVariant {
    /// Whether the body text shadow applies to this variant.
    pub fn draws_text(self) -> bool {
        matches!(self, ToolTipVariant::Default | ToolTipVariant::Text)
    }
}

/// Title, body text and icon of a tooltip.
///
/// Every part may be empty. Empty text measures to nothing and a missing
/// icon is simply not drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolTipContent {
    title: String,
    text: String,
    icon: Option<Image>,
}

impl ToolTipContent {
    /// Create content with only body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title line.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the title line using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the body text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the body text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The icon, if one is set.
    pub fn icon(&self) -> Option<&Image> {
        self.icon.as_ref()
    }

    /// Set or clear the icon.
    pub fn set_icon(&mut self, icon: Option<Image>) {
        self.icon = icon;
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: Image) -> Self {
        self.icon = Some(icon);
        self
    }
}
