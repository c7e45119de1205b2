//! Planning session: the state a user builds up while planning one trip
//!
//! The session owns the current trip, the latest weather sample, the outfit
//! suggestions with their ratings and the status table. Every recomputation
//! reads these; only [`PlanningSession::set_status`] and
//! [`PlanningSession::reset`] touch the status table.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::PackingConfig;
use crate::forecast::{self, ForecastSummary, TemperatureRange, WeatherReading};
use crate::models::{PackingList, ShoppingItem, Status, TripContext, WeatherSample};
use crate::packing::outfits;
use crate::packing::{self, Activity, BasicCategory, Outfit, OutfitItem, Rating, StatusTable};
use crate::{PacklistError, Result};

/// Everything the rendering layer needs for one trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingPlan {
    pub destination: String,
    pub days: u32,
    pub weather: WeatherSample,
    /// Present when the weather came from a forecast
    pub temperature_range: Option<TemperatureRange>,
    pub list: PackingList,
    pub shopping_list: Vec<ShoppingItem>,
    pub travel_basics: Vec<BasicCategory>,
    pub liked_outfits: Vec<Outfit>,
    pub missing_items: Vec<OutfitItem>,
}

/// Mutable planning state for one user session
#[derive(Debug, Clone, Default)]
pub struct PlanningSession {
    config: PackingConfig,
    trip: Option<TripContext>,
    weather: Option<WeatherSample>,
    temperature_range: Option<TemperatureRange>,
    outfits: Vec<Outfit>,
    statuses: StatusTable,
}

impl PlanningSession {
    #[must_use]
    pub fn new(config: PackingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the trip entirely. Statuses are kept.
    pub fn submit_trip(&mut self, trip: TripContext) -> Result<()> {
        let days = trip.duration_days();
        if days > self.config.max_trip_days {
            return Err(PacklistError::invalid_input(format!(
                "trip of {days} days exceeds the maximum of {} days",
                self.config.max_trip_days
            )));
        }
        info!(destination = %trip.destination, days, activities = trip.activities.len(), "trip submitted");
        self.trip = Some(trip);
        Ok(())
    }

    /// Record the resolved weather for the destination
    pub fn update_weather(&mut self, weather: WeatherSample) {
        info!(temperature = weather.temperature, condition = %weather.condition, "weather updated");
        self.weather = Some(weather);
        self.temperature_range = None;
    }

    /// Derive the weather sample from an already-fetched forecast.
    ///
    /// The sample averages the daily temperatures over the first
    /// `forecast_days` days and takes the first day's condition.
    pub fn update_weather_from_forecast(
        &mut self,
        readings: &[WeatherReading],
    ) -> Result<ForecastSummary> {
        let summary = forecast::summarize(readings, self.config.forecast_days as usize)?;
        self.update_weather(summary.sample.clone());
        self.temperature_range = Some(summary.range);
        Ok(summary)
    }

    /// Replace the outfit suggestions, ratings included
    pub fn load_outfits(&mut self, outfits: Vec<Outfit>) {
        info!(outfits = outfits.len(), "outfit suggestions loaded");
        self.outfits = outfits;
    }

    /// Like or dislike a suggested outfit; last rating wins
    pub fn rate_outfit(&mut self, id: u32, rating: Rating) -> Result<()> {
        outfits::rate(&mut self.outfits, id, rating)
    }

    #[must_use]
    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    /// Unowned items of the liked outfits
    #[must_use]
    pub fn missing_items(&self) -> Vec<OutfitItem> {
        outfits::missing_items(&self.outfits)
    }

    /// Change the activity selection of the current trip
    pub fn select_activities(&mut self, activities: impl IntoIterator<Item = Activity>) -> Result<()> {
        let trip = self
            .trip
            .as_ref()
            .ok_or_else(|| PacklistError::invalid_input("no trip submitted"))?;
        let updated = trip.with_activities(activities)?;
        info!(activities = updated.activities.len(), "activity selection changed");
        self.trip = Some(updated);
        Ok(())
    }

    /// Mark an item; last write wins
    pub fn set_status<S: Into<String>>(&mut self, name: S, status: Status) {
        self.statuses.set(name, status);
    }

    #[must_use]
    pub fn status(&self, name: &str) -> Status {
        self.statuses.get(name)
    }

    #[must_use]
    pub fn statuses(&self) -> &StatusTable {
        &self.statuses
    }

    #[must_use]
    pub fn trip(&self) -> Option<&TripContext> {
        self.trip.as_ref()
    }

    #[must_use]
    pub fn weather(&self) -> Option<&WeatherSample> {
        self.weather.as_ref()
    }

    fn inputs(&self) -> Result<(&TripContext, &WeatherSample)> {
        let trip = self
            .trip
            .as_ref()
            .ok_or_else(|| PacklistError::invalid_input("no trip submitted"))?;
        let weather = self
            .weather
            .as_ref()
            .ok_or_else(|| PacklistError::invalid_input("weather not available yet"))?;
        Ok((trip, weather))
    }

    /// Recompute the quantified tiers from the current inputs
    pub fn packing_list(&self) -> Result<PackingList> {
        let (trip, weather) = self.inputs()?;
        Ok(packing::build_packing_list(trip, weather, &self.statuses))
    }

    /// Items currently marked to-buy
    pub fn shopping_list(&self) -> Result<Vec<ShoppingItem>> {
        let list = self.packing_list()?;
        Ok(packing::derive(&list, &self.statuses))
    }

    /// Documents/electronics/toiletries checklist, empty when disabled
    #[must_use]
    pub fn travel_basics(&self) -> Vec<BasicCategory> {
        match (&self.trip, self.config.include_travel_basics) {
            (Some(trip), true) => packing::travel_basics(&trip.destination, &trip.activities),
            _ => Vec::new(),
        }
    }

    /// Full plan for rendering
    #[instrument(level = "debug", skip(self))]
    pub fn plan(&self) -> Result<PackingPlan> {
        let (trip, weather) = self.inputs()?;
        let list = packing::build_packing_list(trip, weather, &self.statuses);
        let shopping_list = packing::derive(&list, &self.statuses);
        Ok(PackingPlan {
            destination: trip.destination.clone(),
            days: trip.duration_days(),
            weather: weather.clone(),
            temperature_range: self.temperature_range,
            list,
            shopping_list,
            travel_basics: self.travel_basics(),
            liked_outfits: outfits::liked(&self.outfits).cloned().collect(),
            missing_items: self.missing_items(),
        })
    }

    /// Start over: forget trip, weather, outfits and every status
    pub fn reset(&mut self) {
        if !self.statuses.is_empty() {
            warn!(statuses = self.statuses.len(), "discarding item statuses");
        }
        self.trip = None;
        self.weather = None;
        self.temperature_range = None;
        self.outfits.clear();
        self.statuses.clear();
        info!("planning session reset");
    }
}
