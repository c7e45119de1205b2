//! Per-item ownership status that survives list recomputation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Status;

/// Item name → status, keyed by exact name.
///
/// Not namespaced by tier: an item name appearing in two tiers shares one
/// entry. Entries are never purged when an item drops out of the list, so a
/// status reappears if the item comes back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTable {
    entries: HashMap<String, Status>,
}

impl StatusTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status, `Unset` for names never set
    #[must_use]
    pub fn get(&self, name: &str) -> Status {
        self.entries.get(name).copied().unwrap_or_default()
    }

    /// Overwrite the status of `name`; last write wins.
    ///
    /// Setting `Unset` removes the entry.
    pub fn set<S: Into<String>>(&mut self, name: S, status: Status) {
        let name = name.into();
        tracing::debug!(item = %name, ?status, "item status changed");
        if status == Status::Unset {
            self.entries.remove(&name);
        } else {
            self.entries.insert(name, status);
        }
    }

    /// Forget every status (session reset)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_is_unset() {
        let table = StatusTable::new();
        assert_eq!(table.get("Scarf"), Status::Unset);
        assert!(table.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = StatusTable::new();
        table.set("Sun hat", Status::ToBuy);
        table.set("Sun hat", Status::Have);
        assert_eq!(table.get("Sun hat"), Status::Have);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_any_state_reachable_from_any_state() {
        let mut table = StatusTable::new();
        let states = [Status::Unset, Status::Have, Status::ToBuy];
        for from in states {
            for to in states {
                table.set("Gloves", from);
                table.set("Gloves", to);
                assert_eq!(table.get("Gloves"), to);
            }
        }
    }

    #[test]
    fn test_setting_unset_clears_the_entry() {
        let mut table = StatusTable::new();
        table.set("Boots", Status::ToBuy);
        table.set("Boots", Status::Unset);
        assert_eq!(table.get("Boots"), Status::Unset);
        assert!(table.is_empty());
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let mut table = StatusTable::new();
        table.set("Sun hat", Status::ToBuy);
        assert_eq!(table.get("sun hat"), Status::Unset);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut table = StatusTable::new();
        table.set("Warm socks", Status::ToBuy);
        table.set("Boots", Status::ToBuy);
        table.set("Gloves", Status::Have);
        assert_eq!(table.len(), 3);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.get("Gloves"), Status::Unset);
    }
}
