//! End-to-end packing list scenarios

use chrono::NaiveDate;
use packlist::packing::{self, StatusTable};
use packlist::{Activity, PackingList, Status, TripContext, WeatherSample};
use rstest::rstest;

fn trip(days: i64, activities: &[&str]) -> TripContext {
    let start = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
    TripContext::new(
        "Edinburgh, Scotland",
        start,
        start + chrono::Duration::days(days - 1),
        activities.iter().map(|tag| Activity::parse(tag)),
    )
    .unwrap()
}

fn build(days: i64, activities: &[&str], temperature: i32, condition: &str, statuses: &StatusTable) -> PackingList {
    packing::build_packing_list(
        &trip(days, activities),
        &WeatherSample::new(temperature, condition),
        statuses,
    )
}

fn essentials(list: &PackingList) -> Vec<&str> {
    list.essentials.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn scenario_a_cool_rain_with_hiking() {
    let list = build(3, &["hiking"], 5, "rain", &StatusTable::new());

    for expected in [
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
    ] {
        assert!(essentials(&list).contains(&expected), "missing {expected}");
    }
    assert_eq!(list.find("Hiking socks").unwrap().quantity, 3);
    assert!(list.recommended.iter().any(|i| i.name == "Waterproof shoes"));
}

#[test]
fn scenario_b_freezing_snow_for_a_week() {
    let list = build(7, &[], -5, "snow", &StatusTable::new());

    for expected in [
        "Heavy winter coat",
        "Thermal underwear",
        "Warm hat",
        "Insulated gloves",
        "Warm boots",
        "Waterproof boots",
        "Waterproof coat",
    ] {
        assert!(essentials(&list).contains(&expected), "missing {expected}");
    }
    assert_eq!(list.find("Thermal underwear").unwrap().quantity, 7);
    assert!(list.recommended.iter().any(|i| i.name == "Snow pants"));
}

#[test]
fn scenario_c_hot_and_clear() {
    let list = build(10, &[], 30, "clear", &StatusTable::new());

    assert!(essentials(&list).contains(&"Sunscreen"));
    assert!(essentials(&list).contains(&"Sunglasses"));
    assert_eq!(list.optional.len(), 1);
    assert_eq!(list.optional[0].name, "Light cardigan for air-conditioned places");
    assert_eq!(list.find("T-shirts").unwrap().quantity, 10);
}

#[test]
fn scenario_d_last_status_write_wins() {
    let mut statuses = StatusTable::new();
    statuses.set("Sun hat", Status::ToBuy);
    statuses.set("Sun hat", Status::Have);

    let list = build(3, &["hiking"], 5, "rain", &statuses);
    assert_eq!(list.find("Sun hat").unwrap().status, Status::Have);
    assert!(packing::derive(&list, &statuses).is_empty());
}

#[test]
fn status_persists_across_recomputation() {
    let mut statuses = StatusTable::new();
    statuses.set("Rain jacket or umbrella", Status::ToBuy);

    let first = build(3, &[], 5, "rain", &statuses);
    let second = build(6, &["business"], 8, "light rain", &statuses);
    for list in [&first, &second] {
        assert_eq!(list.find("Rain jacket or umbrella").unwrap().status, Status::ToBuy);
    }
}

#[test]
fn shopping_list_has_each_to_buy_item_once() {
    let mut statuses = StatusTable::new();
    // "Sun hat" lands in essentials (hiking) and recommended (hot band)
    statuses.set("Sun hat", Status::ToBuy);
    statuses.set("Swimsuit", Status::ToBuy);
    statuses.set("Sandals", Status::Have);

    let list = build(4, &["hiking", "swimming"], 28, "clear", &statuses);
    assert!(list.essentials.iter().any(|i| i.name == "Sun hat"));
    assert!(list.recommended.iter().any(|i| i.name == "Sun hat"));

    let shopping = packing::derive(&list, &statuses);
    let names: Vec<&str> = shopping.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Sun hat", "Swimsuit"]);
}

#[rstest]
#[case(&["museums", "nightlife"])]
#[case(&["Spa & Wellness"])]
fn unknown_activities_add_nothing(#[case] tags: &[&str]) {
    let with_unknown = build(5, tags, 15, "clouds", &StatusTable::new());
    let without = build(5, &[], 15, "clouds", &StatusTable::new());
    assert_eq!(with_unknown, without);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
#[case(30)]
#[case(120)]
fn every_item_has_at_least_one(#[case] days: i64) {
    let list = build(days, &["skiing", "dining", "sightseeing"], -3, "snow wind", &StatusTable::new());
    assert!(list.iter().all(|(_, item)| item.quantity >= 1));
}

#[test]
fn recomputation_is_idempotent() {
    let statuses = StatusTable::new();
    assert_eq!(
        build(5, &["business"], 18, "drizzle", &statuses),
        build(5, &["business"], 18, "drizzle", &statuses)
    );
}

#[test]
fn packing_list_serializes_for_rendering() {
    let mut statuses = StatusTable::new();
    statuses.set("Gloves", Status::ToBuy);
    let list = build(3, &[], 5, "rain", &statuses);

    let json = serde_json::to_value(&list).unwrap();
    let gloves = json["essentials"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["name"] == "Gloves")
        .unwrap();
    assert_eq!(gloves["status"], "toBuy");
    assert_eq!(gloves["quantity"], 1);
}
