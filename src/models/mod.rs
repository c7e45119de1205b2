//! Data models for the packing list engine
//!
//! This module contains the core domain models organized by concern:
//! - Trip: destination, date range and activities
//! - Weather: the temperature/condition observation driving suggestions
//! - Item: statuses, tiers, quantified items and shopping list entries

pub mod item;
pub mod trip;
pub mod weather;

// Re-export all public types for convenient access
pub use item::{PackingItem, PackingList, ShoppingItem, Status, Tier};
pub use trip::TripContext;
pub use weather::WeatherSample;
