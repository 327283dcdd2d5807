use crate::api::VibrationPattern;
use crate::core::{
    GeoPoint, DEFAULT_ALERT_DISTANCE_KM, DEFAULT_MAP_ZOOM, DEFAULT_VIBRATION_PATTERN_MS,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Highest zoom level served by the tile layer
pub const MAX_MAP_ZOOM: u8 = 19;

/// Upper bound on the total vibration pattern duration (ms)
pub const MAX_VIBRATION_TOTAL_MS: u32 = 10_000;

/// Session-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// Distance at or below which the arrival alert fires (km)
    pub alert_distance_km: f64,
    /// Alternating vibrate/pause durations for the alert (ms)
    pub vibration_pattern_ms: Vec<u32>,
    /// Zoom level used when centering on the first fix
    pub map_default_zoom: u8,
    /// Map center shown before the first fix
    pub map_default_center: GeoPoint,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            alert_distance_km: DEFAULT_ALERT_DISTANCE_KM,
            vibration_pattern_ms: DEFAULT_VIBRATION_PATTERN_MS.to_vec(),
            map_default_zoom: DEFAULT_MAP_ZOOM,
            map_default_center: GeoPoint {
                latitude: -23.55,
                longitude: -46.63,
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },
    /// Configuration file I/O error
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error
    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// `save` called without a known file path
    #[error("no configuration file path set")]
    NoFilePath,
}

impl ProximityConfig {
    /// Alert vibration pattern built from `vibration_pattern_ms`
    pub fn vibration_pattern(&self) -> VibrationPattern {
        VibrationPattern::new(self.vibration_pattern_ms.clone())
    }

    /// Check every parameter against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alert_distance_km.is_finite() || self.alert_distance_km <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "alert_distance_km",
                value: self.alert_distance_km.to_string(),
                reason: "must be a positive number of kilometers",
            });
        }

        if self.vibration_pattern_ms.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "vibration_pattern_ms",
                value: "[]".to_string(),
                reason: "must contain at least one duration",
            });
        }

        if self.vibration_pattern().total_duration_ms() > MAX_VIBRATION_TOTAL_MS as u64 {
            return Err(ConfigError::InvalidParameter {
                parameter: "vibration_pattern_ms",
                value: format!("{:?}", self.vibration_pattern_ms),
                reason: "total duration exceeds 10 seconds",
            });
        }

        if self.map_default_zoom > MAX_MAP_ZOOM {
            return Err(ConfigError::InvalidParameter {
                parameter: "map_default_zoom",
                value: self.map_default_zoom.to_string(),
                reason: "exceeds maximum tile zoom",
            });
        }

        if self.map_default_center.validate().is_err() {
            return Err(ConfigError::InvalidParameter {
                parameter: "map_default_center",
                value: format!(
                    "({}, {})",
                    self.map_default_center.latitude, self.map_default_center.longitude
                ),
                reason: "coordinates out of range",
            });
        }

        Ok(())
    }
}

/// Loads, validates and saves the configuration
pub struct ConfigurationManager {
    config: ProximityConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a manager holding the default configuration
    pub fn new() -> Self {
        Self {
            config: ProximityConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create a manager from a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    /// Current configuration
    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Replace the whole configuration after validating it
    pub fn update_config(&mut self, config: ProximityConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: ProximityConfig = serde_json::from_str(&content)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        self.config = config;
        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(path, content)?;

        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save to the file the configuration was last loaded from or saved to
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let path = self.config_file_path.clone().ok_or(ConfigError::NoFilePath)?;
        self.save_to_file(path)
    }

    /// Whether the configuration changed since the last load or save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Set the alert radius, returning the previous value
    pub fn set_alert_distance(&mut self, alert_distance_km: f64) -> Result<f64, ConfigError> {
        let mut updated = self.config.clone();
        updated.alert_distance_km = alert_distance_km;
        updated.validate()?;

        let previous = self.config.alert_distance_km;
        self.config = updated;
        self.is_modified = true;
        Ok(previous)
    }

    /// Current alert radius (km)
    pub fn alert_distance(&self) -> f64 {
        self.config.alert_distance_km
    }

    /// Set the vibration pattern, returning the previous one
    pub fn set_vibration_pattern(&mut self, pattern_ms: Vec<u32>) -> Result<Vec<u32>, ConfigError> {
        let mut updated = self.config.clone();
        updated.vibration_pattern_ms = pattern_ms;
        updated.validate()?;

        let previous = std::mem::replace(&mut self.config, updated).vibration_pattern_ms;
        self.is_modified = true;
        Ok(previous)
    }
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}
