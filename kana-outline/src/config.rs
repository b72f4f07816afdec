use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};
use crate::geometry::transform::SubscriptTransform;
use crate::model::{MatchRules, ViewBox};

pub const START_HINT_RADIUS: f64 = 0.05;
pub const END_HINT_RADIUS: f64 = 0.05;

/// Conversion settings. Every field falls back to its default when absent
/// from a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub start_hint_radius: f64,
    pub end_hint_radius: f64,
    pub rules: MatchRules,
    pub subscript: SubscriptTransform,
    pub default_view_box: ViewBox,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            start_hint_radius: START_HINT_RADIUS,
            end_hint_radius: END_HINT_RADIUS,
            rules: MatchRules::DEFAULT,
            subscript: SubscriptTransform::DEFAULT,
            default_view_box: ViewBox::DEFAULT,
        }
    }
}

impl OutlineConfig {
    /// Parse a config file body. The view box is checked while deserializing;
    /// radii and the subscript scale must be positive.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.check()?;
        Ok(cfg)
    }

    fn check(&self) -> Result<()> {
        let positive = [
            ("start_hint_radius", self.start_hint_radius),
            ("end_hint_radius", self.end_hint_radius),
            ("subscript.scale", self.subscript.scale),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(OutlineError::InvalidConfig(format!("{name} must be positive, got {v}")));
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
