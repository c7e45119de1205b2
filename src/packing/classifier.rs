//! Weather → clothing tier classification
//!
//! Temperature picks exactly one band (first band whose upper bound is not
//! exceeded). Condition rules then add items on top, independently of the
//! band and of each other.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::models::WeatherSample;
use crate::packing::conditions::{Condition, ConditionSet};

/// Item names suggested for one weather sample, grouped by tier.
///
/// Each tier keeps first-seen order and never holds the same name twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionTiers {
    pub essentials: Vec<String>,
    pub recommended: Vec<String>,
    pub optional: Vec<String>,
}

impl SuggestionTiers {
    fn add_essentials(&mut self, items: &[&str]) {
        push_unique(&mut self.essentials, items);
    }

    fn add_recommended(&mut self, items: &[&str]) {
        push_unique(&mut self.recommended, items);
    }

    fn add_optional(&mut self, items: &[&str]) {
        push_unique(&mut self.optional, items);
    }
}

fn push_unique(tier: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !tier.iter().any(|existing| existing == item) {
            tier.push((*item).to_string());
        }
    }
}

/// Temperature band with its clothing suggestions
#[derive(Debug)]
pub struct TemperatureBand {
    /// Inclusive upper bound in °C; `None` for the open-ended warmest band
    pub max_celsius: Option<i32>,
    pub essentials: &'static [&'static str],
    pub recommended: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl TemperatureBand {
    fn covers(&self, temperature: i32) -> bool {
        self.max_celsius.is_none_or(|max| temperature <= max)
    }
}

/// Bands in ascending threshold order; the first covering band wins
pub static TEMPERATURE_BANDS: [TemperatureBand; 5] = [
    TemperatureBand {
        max_celsius: Some(0),
        essentials: &[
            "Heavy winter coat",
            "Thermal underwear",
            "Warm hat",
            "Insulated gloves",
            "Warm boots",
        ],
        recommended: &["Scarf", "Wool socks", "Fleece layer"],
        optional: &[],
    },
    TemperatureBand {
        max_celsius: Some(10),
        essentials: &["Winter coat", "Warm sweater", "Long-sleeve shirts", "Gloves"],
        recommended: &["Light scarf", "Warm socks", "Boots"],
        optional: &[],
    },
    TemperatureBand {
        max_celsius: Some(20),
        essentials: &["Light jacket or coat", "Long-sleeve shirts", "Light sweater"],
        recommended: &["Closed-toe shoes", "Light scarf"],
        optional: &[],
    },
    TemperatureBand {
        max_celsius: Some(25),
        essentials: &["Light layers", "T-shirts", "Light long-sleeve shirts"],
        recommended: &["Light cardigan", "Comfortable walking shoes"],
        optional: &[],
    },
    TemperatureBand {
        max_celsius: None,
        essentials: &["Light, breathable clothing", "T-shirts", "Shorts or light pants"],
        recommended: &["Sun hat", "Sandals"],
        optional: &["Light cardigan for air-conditioned places"],
    },
];

/// Additive rule keyed on a condition category
#[derive(Debug)]
pub struct ConditionRule {
    pub condition: Condition,
    /// Rule only fires above this temperature (exclusive)
    pub min_celsius_exclusive: Option<i32>,
    pub essentials: &'static [&'static str],
    pub recommended: &'static [&'static str],
}

impl ConditionRule {
    fn applies(&self, conditions: &ConditionSet, temperature: i32) -> bool {
        conditions.contains(self.condition)
            && self
                .min_celsius_exclusive
                .is_none_or(|min| temperature > min)
    }
}

/// Condition rules in application order
pub static CONDITION_RULES: [ConditionRule; 4] = [
    ConditionRule {
        condition: Condition::Rain,
        min_celsius_exclusive: None,
        essentials: &["Rain jacket or umbrella"],
        recommended: &["Waterproof shoes"],
    },
    ConditionRule {
        condition: Condition::Snow,
        min_celsius_exclusive: None,
        essentials: &["Waterproof boots", "Waterproof coat"],
        recommended: &["Snow pants"],
    },
    ConditionRule {
        condition: Condition::Clear,
        min_celsius_exclusive: Some(20),
        essentials: &["Sunscreen", "Sunglasses"],
        recommended: &["Sun hat"],
    },
    ConditionRule {
        condition: Condition::Wind,
        min_celsius_exclusive: None,
        essentials: &[],
        recommended: &["Windbreaker"],
    },
];

/// Band covering `temperature`
#[must_use]
pub fn band_for(temperature: i32) -> &'static TemperatureBand {
    TEMPERATURE_BANDS
        .iter()
        .find(|band| band.covers(temperature))
        .unwrap_or(&TEMPERATURE_BANDS[TEMPERATURE_BANDS.len() - 1])
}

/// Suggest clothing tiers for a temperature and condition string
#[must_use]
pub fn classify(temperature: i32, condition: &str) -> SuggestionTiers {
    let mut tiers = SuggestionTiers::default();

    let band = band_for(temperature);
    debug!(temperature, max = ?band.max_celsius, "temperature band selected");
    tiers.add_essentials(band.essentials);
    tiers.add_recommended(band.recommended);
    tiers.add_optional(band.optional);

    let conditions = ConditionSet::classify(condition);
    if conditions.is_unrecognized() {
        debug!(condition, "no condition rule matched");
    }
    for rule in CONDITION_RULES
        .iter()
        .filter(|rule| rule.applies(&conditions, temperature))
    {
        debug!(condition = ?rule.condition, "condition rule applied");
        tiers.add_essentials(rule.essentials);
        tiers.add_recommended(rule.recommended);
    }

    tiers
}

/// Suggest clothing tiers for a weather sample
#[instrument(level = "debug", skip_all, fields(temperature = sample.temperature, condition = %sample.condition))]
#[must_use]
pub fn classify_sample(sample: &WeatherSample) -> SuggestionTiers {
    classify(sample.temperature, &sample.condition)
}
