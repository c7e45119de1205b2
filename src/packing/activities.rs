//! Activity selection and the clothing each activity calls for

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A trip activity chosen by the user.
///
/// Unknown tags are kept as [`Activity::Other`] and expand to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Activity {
    Hiking,
    Swimming,
    Skiing,
    Business,
    Sightseeing,
    Dining,
    Other(String),
}

/// Tag spellings accepted for each known activity, lowercased
const ACTIVITY_ALIASES: [(&str, Activity); 10] = [
    ("hiking", Activity::Hiking),
    ("swimming", Activity::Swimming),
    ("skiing", Activity::Skiing),
    ("business", Activity::Business),
    ("business meetings", Activity::Business),
    ("sightseeing", Activity::Sightseeing),
    ("dining", Activity::Dining),
    ("fine dining", Activity::Dining),
    ("casual dining", Activity::Dining),
    ("ski", Activity::Skiing),
];

impl Activity {
    /// Parse a tag or form label; never fails
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        ACTIVITY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map_or_else(|| Activity::Other(tag.trim().to_string()), |(_, a)| a.clone())
    }

    /// Canonical tag
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Activity::Hiking => "hiking",
            Activity::Swimming => "swimming",
            Activity::Skiing => "skiing",
            Activity::Business => "business",
            Activity::Sightseeing => "sightseeing",
            Activity::Dining => "dining",
            Activity::Other(tag) => tag,
        }
    }

    /// Clothing and gear this activity adds to the essentials
    #[must_use]
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Activity::Hiking => &[
                "Hiking boots",
                "Moisture-wicking shirts",
                "Hiking pants",
                "Hiking socks",
                "Sun hat",
            ],
            Activity::Swimming => &[
                "Swimsuit",
                "Beach towel",
                "Swim shorts",
                "Rash guard",
                "Water shoes",
            ],
            Activity::Skiing => &[
                "Ski jacket",
                "Ski pants",
                "Thermal base layer",
                "Ski socks",
                "Ski gloves",
            ],
            Activity::Business => &[
                "Business suit",
                "Dress shirts",
                "Dress pants",
                "Dress shoes",
                "Tie/Scarf",
            ],
            Activity::Sightseeing => &[
                "Comfortable walking shoes",
                "Casual shirts",
                "Comfortable pants",
                "Day bag",
                "Sun hat",
            ],
            Activity::Dining => &[
                "Dress shoes",
                "Smart casual shirts",
                "Dress pants/skirt",
                "Evening wear",
                "Accessories",
            ],
            Activity::Other(_) => &[],
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Activity::Other(_))
    }
}

impl FromStr for Activity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Activity::parse(s))
    }
}

impl From<String> for Activity {
    fn from(tag: String) -> Self {
        Activity::parse(&tag)
    }
}

impl From<&str> for Activity {
    fn from(tag: &str) -> Self {
        Activity::parse(tag)
    }
}

impl From<Activity> for String {
    fn from(activity: Activity) -> Self {
        activity.tag().to_string()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Union of the items of all `activities`, first-seen order, no duplicates
#[must_use]
pub fn expand(activities: &[Activity]) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for activity in activities {
        if !activity.is_recognized() {
            tracing::debug!(tag = activity.tag(), "activity has no item table, skipping");
            continue;
        }
        for item in activity.items() {
            if !items.iter().any(|existing| existing == item) {
                items.push((*item).to_string());
            }
        }
    }
    items
}
