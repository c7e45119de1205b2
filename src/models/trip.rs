//! Trip parameters submitted once per planning session

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::packing::activities::Activity;
use crate::{PacklistError, Result};

/// Destination, date range and selected activities of a trip.
///
/// Immutable once built: a new submission or a changed activity selection
/// produces a replacement context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripContext {
    /// Free-text destination as typed or picked by the user
    pub destination: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
    /// Selected activities, deduplicated in first-seen order
    pub activities: Vec<Activity>,
}

impl TripContext {
    /// Build a trip, rejecting an end date before the start date
    pub fn new<S: Into<String>>(
        destination: S,
        start_date: NaiveDate,
        end_date: NaiveDate,
        activities: impl IntoIterator<Item = Activity>,
    ) -> Result<Self> {
        if end_date < start_date {
            return Err(PacklistError::invalid_input(format!(
                "trip ends ({end_date}) before it starts ({start_date})"
            )));
        }

        let mut unique: Vec<Activity> = Vec::new();
        for activity in activities {
            if !unique.contains(&activity) {
                unique.push(activity);
            }
        }

        Ok(Self {
            destination: destination.into(),
            start_date,
            end_date,
            activities: unique,
        })
    }

    /// Same trip with a different activity selection
    pub fn with_activities(&self, activities: impl IntoIterator<Item = Activity>) -> Result<Self> {
        Self::new(
            self.destination.clone(),
            self.start_date,
            self.end_date,
            activities,
        )
    }

    /// Inclusive number of calendar days spanned by the trip.
    ///
    /// A trip that starts and ends on the same date lasts one day. This is the
    /// only place the day count is derived.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(span).unwrap_or(u32::MAX)
    }

    /// Human-readable duration label, e.g. "3 day trip"
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} day trip", self.duration_days())
    }
}
