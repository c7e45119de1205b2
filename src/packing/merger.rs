//! Merge weather and activity suggestions into a quantified packing list

use tracing::instrument;

use crate::models::{PackingItem, PackingList};
use crate::packing::classifier::SuggestionTiers;
use crate::packing::quantity::quantity;
use crate::packing::status::StatusTable;

fn dedupe<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    let mut unique: Vec<&str> = Vec::new();
    for name in names {
        if !unique.contains(&name.as_str()) {
            unique.push(name);
        }
    }
    unique
}

fn quantify(names: Vec<&str>, days: u32, statuses: &StatusTable) -> Vec<PackingItem> {
    names
        .into_iter()
        .map(|name| PackingItem {
            name: name.to_string(),
            quantity: quantity(name, days),
            status: statuses.get(name),
        })
        .collect()
}

/// Combine weather tiers with activity items and quantify everything.
///
/// Activity items join the essentials after the weather items. Statuses are
/// only read; the table is left untouched.
#[instrument(level = "debug", skip(weather, activity_items, statuses), fields(activity_count = activity_items.len()))]
#[must_use]
pub fn merge(
    weather: &SuggestionTiers,
    activity_items: &[String],
    days: u32,
    statuses: &StatusTable,
) -> PackingList {
    let essentials = dedupe(weather.essentials.iter().chain(activity_items));
    let recommended = dedupe(&weather.recommended);
    let optional = dedupe(&weather.optional);

    let list = PackingList {
        essentials: quantify(essentials, days, statuses),
        recommended: quantify(recommended, days, statuses),
        optional: quantify(optional, days, statuses),
    };
    tracing::debug!(items = list.len(), "packing list merged");
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::packing::activities::{Activity, expand};
    use crate::packing::classifier::classify;
    use proptest::prelude::*;

    fn names(items: &[PackingItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_weather_items_first_then_activity_items() {
        let weather = classify(5, "rain");
        let activity = expand(&[Activity::Hiking]);
        let list = merge(&weather, &activity, 3, &StatusTable::new());

        assert_eq!(
            names(&list.essentials),
            vec![
                "Winter coat",
                "Warm sweater",
                "Long-sleeve shirts",
                "Gloves",
                "Rain jacket or umbrella",
                "Hiking boots",
                "Moisture-wicking shirts",
                "Hiking pants",
                "Hiking socks",
                "Sun hat",
            ]
        );
        assert!(list.iter().all(|(_, item)| item.status == Status::Unset));
    }

    #[test]
    fn test_activity_items_already_in_weather_essentials_are_dropped() {
        let weather = SuggestionTiers {
            essentials: vec!["Sun hat".to_string()],
            ..SuggestionTiers::default()
        };
        let list = merge(
            &weather,
            &["Sun hat".to_string(), "Day bag".to_string()],
            2,
            &StatusTable::new(),
        );
        assert_eq!(names(&list.essentials), vec!["Sun hat", "Day bag"]);
    }

    #[test]
    fn test_statuses_are_read_from_table() {
        let mut statuses = StatusTable::new();
        statuses.set("Gloves", Status::Have);
        statuses.set("Boots", Status::ToBuy);

        let list = merge(&classify(5, "clouds"), &[], 4, &statuses);
        assert_eq!(list.find("Gloves").unwrap().status, Status::Have);
        assert_eq!(list.find("Boots").unwrap().status, Status::ToBuy);
        assert_eq!(list.find("Winter coat").unwrap().status, Status::Unset);
    }

    #[test]
    fn test_quantities_use_trip_length() {
        let list = merge(&classify(5, "rain"), &expand(&[Activity::Hiking]), 3, &StatusTable::new());
        assert_eq!(list.find("Hiking socks").unwrap().quantity, 3);
        assert_eq!(list.find("Long-sleeve shirts").unwrap().quantity, 3);
        assert_eq!(list.find("Winter coat").unwrap().quantity, 1);
        assert!(list.iter().all(|(_, item)| item.quantity >= 1));
    }

    #[test]
    fn test_merge_is_repeatable() {
        let weather = classify(-2, "snow wind");
        let activity = expand(&[Activity::Skiing, Activity::Dining]);
        let statuses = StatusTable::new();
        assert_eq!(
            merge(&weather, &activity, 9, &statuses),
            merge(&weather, &activity, 9, &statuses)
        );
    }

    proptest! {
        #[test]
        fn prop_duplicate_activity_selection_changes_nothing(
            temperature in -20i32..40,
            idx in 0usize..6,
            days in 1u32..30,
        ) {
            let activity = [
                Activity::Hiking,
                Activity::Swimming,
                Activity::Skiing,
                Activity::Business,
                Activity::Sightseeing,
                Activity::Dining,
            ][idx].clone();
            let weather = classify(temperature, "clear");
            let statuses = StatusTable::new();
            let once = merge(&weather, &expand(&[activity.clone()]), days, &statuses);
            let twice = merge(&weather, &expand(&[activity.clone(), activity]), days, &statuses);
            prop_assert_eq!(once, twice);
        }
    }
}
