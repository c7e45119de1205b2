//! Configuration management for the packing list engine
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PacklistError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PacklistConfig {
    /// Packing list generation settings
    pub packing: PackingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Packing list generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Emit the documents/electronics/toiletries checklist next to the tiers
    #[serde(default = "default_include_travel_basics")]
    pub include_travel_basics: bool,
    /// Longest trip (inclusive days) accepted by the planner
    #[serde(default = "default_max_trip_days")]
    pub max_trip_days: u32,
    /// Number of forecast days summarized from hourly readings
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_include_travel_basics() -> bool {
    true
}

fn default_max_trip_days() -> u32 {
    365
}

fn default_forecast_days() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            include_travel_basics: default_include_travel_basics(),
            max_trip_days: default_max_trip_days(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl PacklistConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("packlist.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // PACKLIST_PACKING__MAX_TRIP_DAYS=30 style overrides
        builder = builder.add_source(
            Environment::with_prefix("PACKLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PacklistConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        tracing::debug!(path = %config_file.display(), "configuration loaded");
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("packlist").join("config.toml"))
    }

    /// Apply default values to zeroed or empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.packing.max_trip_days == 0 {
            self.packing.max_trip_days = default_max_trip_days();
        }
        if self.packing.forecast_days == 0 {
            self.packing.forecast_days = default_forecast_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.packing.max_trip_days > 3650 {
            return Err(
                PacklistError::config("Maximum trip length cannot exceed 3650 days").into(),
            );
        }

        if self.packing.forecast_days > 16 {
            return Err(PacklistError::config("Forecast days cannot exceed 16").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PacklistError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PacklistError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
