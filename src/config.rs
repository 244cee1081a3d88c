//! Configuration - the option table as one plain struct.
//!
//! `BodyConfig` is what a host hands over from the outside (JSON file, CLI
//! flags). Every field has a documented default so an empty object is a
//! valid config:
//!
//! ```json
//! {
//!   "data": [{ "slug": "left-biceps", "color": "#ff0000" }],
//!   "gender": "male",
//!   "side": "front",
//!   "scale": 1,
//!   "border": "#dfdfdf",
//!   "disabledParts": [],
//!   "hiddenParts": [],
//!   "defaultFill": "#3f3f3f"
//! }
//! ```
//!
//! Unknown slugs in `data`, `disabledParts` or `hiddenParts` are dropped
//! with a warning. They could never match a drawn region anyway.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::renderer::{self, Diagram, RenderOptions};
use crate::resolver::{Resolver, resolve};
use crate::state::ClickCallback;
use crate::types::{BodyPartData, BodyPartSlug, Border, DEFAULT_FILL, Gender, Side};

/// Full diagram configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyConfig {
    /// Highlight list. Later entries win for repeated slugs.
    #[serde(deserialize_with = "lenient_highlights")]
    pub data: Vec<BodyPartData>,
    pub gender: Gender,
    pub side: Side,
    /// Multiplier on the 200×400 base canvas.
    pub scale: f64,
    pub border: Border,
    #[serde(deserialize_with = "lenient_slugs")]
    pub disabled_parts: Vec<BodyPartSlug>,
    #[serde(deserialize_with = "lenient_slugs")]
    pub hidden_parts: Vec<BodyPartSlug>,
    pub default_fill: String,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            gender: Gender::Male,
            side: Side::Front,
            scale: 1.0,
            border: Border::default(),
            disabled_parts: Vec::new(),
            hidden_parts: Vec::new(),
            default_fill: DEFAULT_FILL.to_string(),
        }
    }
}

impl BodyConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading body config");
        Self::from_json(&json)
    }

    /// Reject values the renderer cannot draw sensibly.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Region resolver for the current highlight, disabled and hidden lists.
    pub fn resolver(&self) -> Resolver {
        resolve(
            &self.data,
            self.disabled_parts.iter().copied(),
            self.default_fill.as_str(),
        )
        .with_hidden(self.hidden_parts.iter().copied())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            gender: self.gender,
            side: self.side,
            scale: self.scale,
            border: self.border.clone(),
        }
    }

    /// Render with an optional activation callback.
    pub fn render(&self, on_click: Option<ClickCallback>) -> Diagram {
        renderer::render(&self.render_options(), &self.resolver(), on_click)
    }
}

// =============================================================================
// Lenient slug decoding
// =============================================================================

#[derive(Deserialize)]
struct RawHighlight {
    slug: String,
    color: String,
}

fn lenient_highlights<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<BodyPartData>, D::Error> {
    let raw = Vec::<RawHighlight>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| match entry.slug.parse::<BodyPartSlug>() {
            Ok(slug) => Some(BodyPartData::new(slug, entry.color)),
            Err(err) => {
                tracing::warn!(%err, "dropping highlight");
                None
            }
        })
        .collect())
}

fn lenient_slugs<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<BodyPartSlug>, D::Error> {
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|name| match name.parse::<BodyPartSlug>() {
            Ok(slug) => Some(slug),
            Err(err) => {
                tracing::warn!(%err, "dropping slug");
                None
            }
        })
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
