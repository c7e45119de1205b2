//! Packing list items, tiers and ownership status

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-declared ownership state of an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    /// Never marked, or explicitly cleared
    #[default]
    Unset,
    /// Already owned
    Have,
    /// Needs to be purchased
    ToBuy,
}

impl Status {
    /// Whether the user has marked the item one way or the other
    #[must_use]
    pub fn is_marked(self) -> bool {
        self != Status::Unset
    }

    /// Chip label shown next to a marked item
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Unset => "",
            Status::Have => "Have",
            Status::ToBuy => "To Buy",
        }
    }
}

/// Priority band of a packing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Essentials,
    Recommended,
    Optional,
}

impl Tier {
    /// All tiers in rendering order
    pub const ALL: [Tier; 3] = [Tier::Essentials, Tier::Recommended, Tier::Optional];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tier::Essentials => "Essential Items",
            Tier::Recommended => "Recommended Items",
            Tier::Optional => "Optional Items",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A quantified item on the packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub name: String,
    /// Always at least 1
    pub quantity: u32,
    pub status: Status,
}

impl fmt::Display for PackingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x)", self.name, self.quantity)
    }
}

/// Quantified tiers produced by merging weather and activity suggestions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    pub essentials: Vec<PackingItem>,
    pub recommended: Vec<PackingItem>,
    pub optional: Vec<PackingItem>,
}

impl PackingList {
    /// Items of one tier
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[PackingItem] {
        match tier {
            Tier::Essentials => &self.essentials,
            Tier::Recommended => &self.recommended,
            Tier::Optional => &self.optional,
        }
    }

    /// All items in tier-then-insertion order, tagged with their tier
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &PackingItem)> {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.tier(tier).iter().map(move |item| (tier, item)))
    }

    /// Look up an item by exact name, searching tiers in order
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PackingItem> {
        self.iter().map(|(_, item)| item).find(|item| item.name == name)
    }

    /// Only the items the user has marked as owned or to-buy
    pub fn marked_items(&self) -> impl Iterator<Item = (Tier, &PackingItem)> {
        self.iter().filter(|(_, item)| item.status.is_marked())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.essentials.len() + self.recommended.len() + self.optional.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An entry of the derived shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: u32,
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x)", self.name, self.quantity)
    }
}
