//! Weather observation consumed by the packing engine

use serde::{Deserialize, Serialize};

use crate::packing::conditions::ConditionSet;
use crate::{PacklistError, Result};

/// A single weather observation for the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Temperature in degrees Celsius
    pub temperature: i32,
    /// Lowercase condition keyword(s) as reported by the provider, e.g. "rain"
    pub condition: String,
}

impl WeatherSample {
    /// Create a sample from an already-validated temperature
    #[must_use]
    pub fn new<S: AsRef<str>>(temperature: i32, condition: S) -> Self {
        Self {
            temperature,
            condition: condition.as_ref().trim().to_lowercase(),
        }
    }

    /// Create a sample from a raw provider reading, rounding to whole degrees
    pub fn from_reading<S: AsRef<str>>(temperature: f64, condition: S) -> Result<Self> {
        Ok(Self::new(round_celsius(temperature)?, condition))
    }

    /// Create a sample from textual input such as a form field
    pub fn parse<S: AsRef<str>>(temperature: &str, condition: S) -> Result<Self> {
        let reading: f64 = temperature.trim().parse().map_err(|_| {
            PacklistError::invalid_input(format!("temperature '{temperature}' is not a number"))
        })?;
        Self::from_reading(reading, condition)
    }

    /// Condition categories recognized in this sample
    #[must_use]
    pub fn conditions(&self) -> ConditionSet {
        ConditionSet::classify(&self.condition)
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }
}

/// Round a Celsius reading to whole degrees, halves toward +inf (-2.5 -> -2).
///
/// NaN and infinities are rejected.
pub(crate) fn round_celsius(value: f64) -> Result<i32> {
    if !value.is_finite() {
        return Err(PacklistError::invalid_input(format!(
            "temperature {value} is not a finite number"
        )));
    }
    let rounded = (value + 0.5).floor();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(PacklistError::invalid_input(format!(
            "temperature {value} is out of range"
        )));
    }
    Ok(rounded as i32)
}
