//! Weather condition keyword classification
//!
//! Providers report free-text conditions ("light rain", "clear sky", ...).
//! The engine only cares about a handful of categories, recognized by an
//! ordered keyword table. Text matching none of them is "unrecognized" and
//! contributes nothing beyond the temperature bucket.

use serde::{Deserialize, Serialize};

/// Condition category that triggers extra packing suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Rain,
    Snow,
    Clear,
    Wind,
}

/// Keyword table, evaluated in order against the lowercased condition text
pub const CONDITION_KEYWORDS: [(&str, Condition); 5] = [
    ("rain", Condition::Rain),
    ("drizzle", Condition::Rain),
    ("snow", Condition::Snow),
    ("clear", Condition::Clear),
    ("wind", Condition::Wind),
];

/// Categories recognized in one condition string, in first-match order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet(Vec<Condition>);

impl ConditionSet {
    /// Classify a condition string. Several categories may apply at once.
    #[must_use]
    pub fn classify(condition: &str) -> Self {
        let lowered = condition.to_lowercase();
        let mut found = Vec::new();
        for (keyword, category) in CONDITION_KEYWORDS {
            if lowered.contains(keyword) && !found.contains(&category) {
                found.push(category);
            }
        }
        Self(found)
    }

    #[must_use]
    pub fn contains(&self, condition: Condition) -> bool {
        self.0.contains(&condition)
    }

    /// No keyword matched
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Condition> + '_ {
        self.0.iter().copied()
    }
}
