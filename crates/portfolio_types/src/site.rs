//! Site-wide profile settings.

use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to and where its assets live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Shown in the hero and the navigation brand
    pub owner_name: String,
    /// One-line identity under the name
    pub tagline: String,
    /// Intro paragraph on the home page
    pub bio: String,
    /// Prefix for week preview images; empty means relative to the page
    pub asset_base: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            owner_name: "Your Name".to_string(),
            tagline: "Creative Coder & Visual Artist".to_string(),
            bio: "Welcome to my creative coding portfolio! This site documents my \
                  journey learning p5.js and generative art."
                .to_string(),
            asset_base: String::new(),
        }
    }
}

impl SiteProfile {
    /// Parse a profile from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Hero greeting, e.g. `Hi, I'm Your Name`.
    pub fn greeting(&self) -> String {
        format!("Hi, I'm {}", self.owner_name)
    }
}
