//! Gallery configuration loaded from `gallery.json`.

use anyhow::Context;
use loaders_ui::SpinnerKind;
use serde::Deserialize;

/// Page settings. Missing fields fall back to [`GalleryConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub title: String,
    /// CSS color behind each spinner (the spinners themselves are white)
    pub background: String,
    pub initially_loading: bool,
    /// Kebab-case spinner names, in display order
    pub spinners: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Loaders".to_string(),
            background: "#2f4050".to_string(),
            initially_loading: true,
            spinners: SpinnerKind::ALL.iter().map(|k| k.name().to_string()).collect(),
        }
    }
}

impl GalleryConfig {
    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid gallery configuration")
    }

    /// Resolve the configured names, skipping unknown names and repeats.
    pub fn kinds(&self) -> Vec<SpinnerKind> {
        let mut kinds = Vec::new();
        for name in &self.spinners {
            match name.parse::<SpinnerKind>() {
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping spinner: {}", e),
            }
        }
        kinds
    }
}
