use serde::{Deserialize, Serialize};

use crate::error::{MarkError, MarkResult};

/// Default pixel size for mark-line value labels.
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 10.0;

/// Font handle handed to painters for label drawing and measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    /// Generic sans-serif face at the default label size.
    #[must_use]
    pub fn label_default() -> Self {
        Self::new("sans-serif", DEFAULT_LABEL_FONT_SIZE)
    }

    pub fn validate(&self) -> MarkResult<()> {
        if self.family.is_empty() {
            return Err(MarkError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(MarkError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Source of the fallback label font used when a request supplies none.
pub trait FontProvider {
    fn default_font(&self) -> MarkResult<FontSpec>;
}

/// Provider backed by a fixed preference list; the first non-empty family wins.
#[derive(Debug, Clone)]
pub struct SystemFontProvider {
    families: Vec<String>,
    size_px: f64,
}

impl SystemFontProvider {
    #[must_use]
    pub fn new(families: Vec<String>, size_px: f64) -> Self {
        Self { families, size_px }
    }
}

impl Default for SystemFontProvider {
    fn default() -> Self {
        Self::new(vec!["sans-serif".to_owned()], DEFAULT_LABEL_FONT_SIZE)
    }
}

impl FontProvider for SystemFontProvider {
    fn default_font(&self) -> MarkResult<FontSpec> {
        let family = self
            .families
            .iter()
            .find(|family| !family.is_empty())
            .ok_or_else(|| {
                MarkError::FontUnavailable("font provider has no configured family".to_owned())
            })?;
        Ok(FontSpec::new(family.clone(), self.size_px))
    }
}
