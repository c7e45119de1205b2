//! Packing list synthesis
//!
//! This module turns a trip and a weather sample into a quantified packing list:
//! - Weather classification into essential/recommended/optional tiers
//! - Activity expansion into extra essentials
//! - Per-item quantities scaled by trip length
//! - Merge/deduplication of all item sources
//! - Sticky per-item status and the derived shopping list
//! - Non-clothing travel basics
//! - Outfit ratings and the items liked outfits still need

pub mod activities;
pub mod basics;
pub mod classifier;
pub mod conditions;
pub mod merger;
pub mod outfits;
pub mod quantity;
pub mod shopping;
pub mod status;

// Re-export commonly used types from submodules
pub use activities::{Activity, expand};
pub use basics::{BasicCategory, travel_basics};
pub use classifier::{SuggestionTiers, classify, classify_sample};
pub use conditions::{Condition, ConditionSet};
pub use merger::merge;
pub use outfits::{Outfit, OutfitItem, Rating, missing_items};
pub use quantity::quantity;
pub use shopping::derive;
pub use status::StatusTable;

use tracing::instrument;

use crate::models::{PackingList, TripContext, WeatherSample};

/// Run the full pipeline for one trip and weather sample
#[instrument(level = "debug", skip_all, fields(destination = %trip.destination, days = trip.duration_days()))]
#[must_use]
pub fn build_packing_list(
    trip: &TripContext,
    weather: &WeatherSample,
    statuses: &StatusTable,
) -> PackingList {
    let tiers = classify_sample(weather);
    let activity_items = expand(&trip.activities);
    merge(&tiers, &activity_items, trip.duration_days(), statuses)
}
