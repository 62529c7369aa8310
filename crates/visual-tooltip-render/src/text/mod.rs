//! Fonts and text measurement.
//!
//! - [`Font`]: family, size, weight and style of a run of text
//! - [`TextRenderingHint`]: quality hint applied to a drawing surface
//! - [`TextMeasurer`]: the metrics provider used to size popup content
//!
//! Two measurers are provided. [`CosmicTextMeasurer`] shapes text with
//! cosmic-text against real font data. [`FixedAdvanceMeasurer`] derives
//! metrics from character counts only, which makes it useful for headless
//! hosts and deterministic tests.

mod font;
mod measure;

pub use font::{Font, FontFamily, FontStyle, FontWeight, TextRenderingHint};
pub use measure::{CosmicTextMeasurer, DEFAULT_LINE_HEIGHT, FixedAdvanceMeasurer, TextMeasurer};
