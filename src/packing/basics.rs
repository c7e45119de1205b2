//! Non-clothing travel checklist: documents, electronics, toiletries,
//! destination-specific and activity-specific extras.
//!
//! These are plain checklists. They are never quantified and never merged into
//! the weather/activity tiers.

use serde::{Deserialize, Serialize};

use crate::packing::activities::Activity;

/// A named checklist group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCategory {
    pub category: String,
    pub items: Vec<String>,
}

impl BasicCategory {
    fn new(category: &str, items: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
        }
    }
}

const ALWAYS: [(&str, &[&str]); 3] = [
    (
        "Documents",
        &["Passport/ID", "Travel insurance", "Booking confirmations", "Credit cards"],
    ),
    (
        "Electronics",
        &["Phone + charger", "Power adapter", "Portable charger", "Camera"],
    ),
    (
        "Toiletries",
        &[
            "Toothbrush & toothpaste",
            "Deodorant",
            "Shampoo & conditioner",
            "Skincare items",
        ],
    ),
];

/// Destination keyword groups; the first group with a matching keyword wins
const DESTINATION_GROUPS: [(&[&str], &[&str]); 3] = [
    (
        &["beach", "tropical"],
        &["Swimwear", "Beach towel", "Sunscreen", "Sunglasses", "Sun hat", "Sandals"],
    ),
    (
        &["mountain", "ski"],
        &[
            "Warm jacket",
            "Thermal underwear",
            "Gloves",
            "Scarf",
            "Winter boots",
            "Warm socks",
        ],
    ),
    (
        &["city"],
        &[
            "Comfortable walking shoes",
            "City map/guide",
            "Day bag/backpack",
            "Smart casual outfits",
        ],
    ),
];

/// Category name for the destination-dependent extras
pub const LOCATION_CATEGORY: &str = "Location-Specific Items";

/// Category name for gear the selected activities call for
pub const ACTIVITY_CATEGORY: &str = "Activity-Specific Items";

fn activity_extras(activity: &Activity) -> &'static [&'static str] {
    match activity {
        Activity::Business => &["Business suits", "Professional shoes", "Business cards"],
        Activity::Hiking => &["Hiking boots", "Hiking socks", "Backpack", "Water bottle"],
        Activity::Swimming => &["Swimsuit", "Goggles", "Beach towel", "Flip-flops"],
        _ => &[],
    }
}

/// Items suggested purely from the destination text
#[must_use]
pub fn destination_items(destination: &str) -> Vec<String> {
    let lowered = destination.to_lowercase();
    DESTINATION_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, items)| items.iter().map(|item| (*item).to_string()).collect())
        .unwrap_or_default()
}

/// Gear for the selected activities, in selection order
#[must_use]
pub fn activity_items(activities: &[Activity]) -> Vec<String> {
    activities
        .iter()
        .flat_map(activity_extras)
        .map(|item| (*item).to_string())
        .collect()
}

/// Full travel checklist for a trip; empty categories are left out
#[must_use]
pub fn travel_basics(destination: &str, activities: &[Activity]) -> Vec<BasicCategory> {
    let mut categories: Vec<BasicCategory> = ALWAYS
        .iter()
        .map(|(category, items)| BasicCategory::new(category, items))
        .collect();

    let location_items = destination_items(destination);
    if !location_items.is_empty() {
        categories.push(BasicCategory {
            category: LOCATION_CATEGORY.to_string(),
            items: location_items,
        });
    }

    let activity_items = activity_items(activities);
    if !activity_items.is_empty() {
        categories.push(BasicCategory {
            category: ACTIVITY_CATEGORY.to_string(),
            items: activity_items,
        });
    }
    categories
}
