// src/config/options.rs
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::consts::*;
use crate::loader::DataSource;

/// Everything the user can configure, read from `offerings.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub ui: UiOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Directory or http(s) base URL holding `<year>/offerings.json`
    pub base: String,
    pub year: u16,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base: s!(DEFAULT_DATA_BASE),
            year: DEFAULT_YEAR,
        }
    }
}

impl SourceOptions {
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.base)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    /// Horizontal travel a swipe needs before it navigates the modal
    pub swipe_min_distance: f32,
    /// Distance from the bottom of the grid that triggers the next page
    pub scroll_threshold: f32,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            swipe_min_distance: SWIPE_MIN_DISTANCE,
            scroll_threshold: SCROLL_THRESHOLD,
        }
    }
}

impl AppOptions {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }

    /// Missing file → defaults. Unreadable or malformed file → logged, defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(opts) => {
                logf!("Config: Loaded {} (base={}, year={})",
                    path.display(), opts.source.base, opts.source.year);
                opts
            }
            Err(e) => {
                logw!("Config: Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
