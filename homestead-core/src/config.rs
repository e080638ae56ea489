//! Configuration types

use crate::{ConfigError, Coordinates, HomesteadError, HomesteadResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cap on the featured listings query.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Master configuration struct.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HomesteadConfig {
    /// Maximum number of listings returned by the featured query
    pub featured_limit: usize,
    /// Map center used when no listing carries coordinates
    pub default_center: Coordinates,
    /// Map zoom when browsing a result set
    pub overview_zoom: u8,
    /// Map zoom when a single listing is selected
    pub detail_zoom: u8,
    /// JSON array of listings loaded at startup
    pub dataset_path: Option<PathBuf>,
}

impl Default for HomesteadConfig {
    fn default() -> Self {
        Self {
            featured_limit: DEFAULT_FEATURED_LIMIT,
            // Denver, CO
            default_center: Coordinates::new(39.7392, -104.9903),
            overview_zoom: 11,
            detail_zoom: 15,
            dataset_path: None,
        }
    }
}

impl HomesteadConfig {
    /// Load and validate a TOML config file.
    pub fn from_path(path: &Path) -> HomesteadResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> HomesteadResult<Self> {
        let config: HomesteadConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    /// Returns Ok(()) if valid, Err(HomesteadError::Config) if invalid.
    ///
    /// Validates:
    /// - featured_limit > 0
    /// - default_center within latitude/longitude range
    /// - zoom levels in 0..=20 and detail_zoom >= overview_zoom
    pub fn validate(&self) -> HomesteadResult<()> {
        if self.featured_limit == 0 {
            return Err(invalid("featured_limit", self.featured_limit, "featured_limit must be greater than 0"));
        }

        let Coordinates { lat, lng } = self.default_center;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("default_center.lat", lat, "latitude must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(invalid("default_center.lng", lng, "longitude must be between -180 and 180"));
        }

        if self.overview_zoom > MAX_ZOOM {
            return Err(invalid("overview_zoom", self.overview_zoom, "zoom must be at most 20"));
        }
        if self.detail_zoom > MAX_ZOOM {
            return Err(invalid("detail_zoom", self.detail_zoom, "zoom must be at most 20"));
        }
        if self.detail_zoom < self.overview_zoom {
            return Err(invalid(
                "detail_zoom",
                self.detail_zoom,
                "detail_zoom must be >= overview_zoom",
            ));
        }

        if let Some(path) = &self.dataset_path {
            if path.as_os_str().is_empty() {
                return Err(invalid("dataset_path", "\"\"", "dataset_path must not be empty"));
            }
        }

        Ok(())
    }
}

const MAX_ZOOM: u8 = 20;

fn invalid(field: &str, value: impl ToString, reason: &str) -> HomesteadError {
    HomesteadError::Config(ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
