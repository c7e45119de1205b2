//! Suggested outfits, like/dislike ratings and the items still missing

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PacklistError, Result};

/// User verdict on a suggested outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Like,
    Dislike,
}

/// One garment of an outfit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    /// Items without the flag count as not owned
    #[serde(default)]
    pub owned: bool,
}

/// A complete look suggested for one occasion of the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: u32,
    pub day: String,
    pub occasion: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<OutfitItem>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Outfit {
    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.rating == Some(Rating::Like)
    }
}

/// Set the rating of outfit `id`; re-rating overwrites
pub fn rate(outfits: &mut [Outfit], id: u32, rating: Rating) -> Result<()> {
    let outfit = outfits
        .iter_mut()
        .find(|outfit| outfit.id == id)
        .ok_or_else(|| PacklistError::invalid_input(format!("no outfit with id {id}")))?;
    debug!(id, ?rating, "outfit rated");
    outfit.rating = Some(rating);
    Ok(())
}

/// Liked outfits, in suggestion order
pub fn liked(outfits: &[Outfit]) -> impl Iterator<Item = &Outfit> {
    outfits.iter().filter(|outfit| outfit.is_liked())
}

/// Unowned items of liked outfits, first occurrence of each item id kept
#[must_use]
pub fn missing_items(outfits: &[Outfit]) -> Vec<OutfitItem> {
    let mut seen = HashSet::new();
    liked(outfits)
        .flat_map(|outfit| outfit.items.iter())
        .filter(|item| !item.owned && seen.insert(item.id.as_str()))
        .cloned()
        .collect()
}
