//! Shopping list derived from the items marked to-buy

use std::collections::HashSet;

use crate::models::{PackingList, ShoppingItem, Status};
use crate::packing::status::StatusTable;

/// Items whose current status is `ToBuy`, each name once, in
/// tier-then-insertion order.
///
/// Status is taken from `statuses` rather than from the items themselves, so
/// a list computed before the latest status change still yields the current
/// shopping list.
#[must_use]
pub fn derive(list: &PackingList, statuses: &StatusTable) -> Vec<ShoppingItem> {
    let mut seen: HashSet<&str> = HashSet::new();
    list.iter()
        .map(|(_, item)| item)
        .filter(|item| statuses.get(&item.name) == Status::ToBuy)
        .filter(|item| seen.insert(item.name.as_str()))
        .map(|item| ShoppingItem {
            name: item.name.clone(),
            quantity: item.quantity,
        })
        .collect()
}
