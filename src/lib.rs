//! `packlist` - weather- and activity-aware packing lists
//!
//! This library turns trip parameters and a weather observation into a
//! categorized, quantified packing list, tracks which items the traveler
//! already owns or still has to buy, and derives a shopping list from that.

pub mod config;
pub mod error;
pub mod forecast;
pub mod logging;
pub mod models;
pub mod packing;
pub mod session;

// Re-export core types for public API
pub use crate::config::PacklistConfig;
pub use error::PacklistError;
pub use forecast::{DailySample, ForecastSummary, TemperatureRange, WeatherReading};
pub use models::{PackingItem, PackingList, ShoppingItem, Status, Tier, TripContext, WeatherSample};
pub use packing::{Activity, Outfit, OutfitItem, Rating, StatusTable, SuggestionTiers};
pub use session::{PackingPlan, PlanningSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PacklistError>;
