//! Reduction of already-fetched forecast readings into weather samples
//!
//! Providers return several readings per day (3-hourly, hourly, ...). The
//! packing engine wants one temperature and one condition, so readings are
//! grouped per UTC calendar day, temperatures averaged and the condition taken
//! from the middle reading of the day. The trip-level sample averages the
//! daily temperatures and keeps the first day's condition.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::models::WeatherSample;
use crate::models::weather::round_celsius;
use crate::{PacklistError, Result};

/// One raw forecast reading as returned by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Provider condition keyword, e.g. "Rain"
    pub condition: String,
}

/// Representative weather of a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub sample: WeatherSample,
}

/// Rounded temperature span over a set of readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub avg: i32,
    pub max: i32,
}

/// Everything derived from one forecast fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub days: Vec<DailySample>,
    pub range: TemperatureRange,
    /// Sample the packing engine classifies
    pub sample: WeatherSample,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

fn summarize_day(mut readings: Vec<&WeatherReading>) -> Result<WeatherSample> {
    readings.sort_by_key(|r| r.timestamp);
    let middle = readings
        .get(readings.len() / 2)
        .ok_or_else(|| PacklistError::invalid_input("no readings for day"))?;
    let avg = mean(readings.iter().map(|r| r.temperature))
        .ok_or_else(|| PacklistError::invalid_input("no readings for day"))?;
    WeatherSample::from_reading(avg, &middle.condition)
}

/// One sample per calendar day, ascending, limited to the first `max_days` days
#[instrument(level = "debug", skip(readings), fields(reading_count = readings.len()))]
pub fn daily_samples(readings: &[WeatherReading], max_days: usize) -> Result<Vec<DailySample>> {
    if readings.is_empty() {
        return Err(PacklistError::invalid_input("forecast contains no readings"));
    }

    let mut by_day: BTreeMap<NaiveDate, Vec<&WeatherReading>> = BTreeMap::new();
    for reading in readings {
        by_day
            .entry(reading.timestamp.date_naive())
            .or_default()
            .push(reading);
    }

    let samples = by_day
        .into_iter()
        .take(max_days)
        .map(|(date, day)| Ok(DailySample { date, sample: summarize_day(day)? }))
        .collect::<Result<Vec<_>>>()?;

    debug!(days = samples.len(), "forecast summarized");
    Ok(samples)
}

/// Minimum, mean and maximum temperature over all readings
pub fn summarize_range(readings: &[WeatherReading]) -> Result<TemperatureRange> {
    let avg = mean(readings.iter().map(|r| r.temperature))
        .ok_or_else(|| PacklistError::invalid_input("forecast contains no readings"))?;
    let min = readings
        .iter()
        .map(|r| r.temperature)
        .fold(f64::INFINITY, f64::min);
    let max = readings
        .iter()
        .map(|r| r.temperature)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(TemperatureRange {
        min: round_celsius(min)?,
        avg: round_celsius(avg)?,
        max: round_celsius(max)?,
    })
}

/// Trip-level sample: rounded mean of the daily temperatures, first day's condition
pub fn representative_sample(days: &[DailySample]) -> Result<WeatherSample> {
    let first = days
        .first()
        .ok_or_else(|| PacklistError::invalid_input("forecast contains no days"))?;
    let avg = mean(days.iter().map(|d| f64::from(d.sample.temperature)))
        .ok_or_else(|| PacklistError::invalid_input("forecast contains no days"))?;
    WeatherSample::from_reading(avg, &first.sample.condition)
}

/// Daily samples, overall temperature range and the representative sample
#[instrument(level = "debug", skip(readings), fields(reading_count = readings.len()))]
pub fn summarize(readings: &[WeatherReading], max_days: usize) -> Result<ForecastSummary> {
    let days = daily_samples(readings, max_days)?;
    let sample = representative_sample(&days)?;
    let range = summarize_range(readings)?;
    debug!(temperature = sample.temperature, condition = %sample.condition, "representative weather");
    Ok(ForecastSummary { days, range, sample })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading(day: u32, hour: u32, temperature: f64, condition: &str) -> WeatherReading {
        WeatherReading {
            timestamp: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
            temperature,
            condition: condition.to_string(),
        }
    }

    #[test]
    fn test_daily_samples_average_and_middle_condition() {
        let readings = vec![
            reading(2, 9, 4.0, "Clouds"),
            reading(1, 18, 7.0, "Rain"),
            reading(1, 6, 2.0, "Clear"),
            reading(1, 12, 6.0, "Drizzle"),
            reading(2, 15, 9.0, "Clear"),
        ];

        let days = daily_samples(&readings, 5).unwrap();
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(days[0].sample.temperature, 5);
        assert_eq!(days[0].sample.condition, "drizzle");

        // (4 + 9) / 2 = 6.5 rounds up
        assert_eq!(days[1].sample.temperature, 7);
        assert_eq!(days[1].sample.condition, "clear");
    }

    #[test]
    fn test_daily_samples_respects_max_days() {
        let readings: Vec<WeatherReading> = (1..=7).map(|d| reading(d, 12, 10.0, "clear")).collect();
        let days = daily_samples(&readings, 5).unwrap();
        assert_eq!(days.len(), 5);
        assert_eq!(days[4].date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    }

    #[test]
    fn test_no_readings_is_invalid_input() {
        assert!(daily_samples(&[], 5).unwrap_err().is_invalid_input());
        assert!(summarize_range(&[]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_non_finite_reading_is_invalid_input() {
        let readings = vec![reading(1, 12, f64::NAN, "rain")];
        assert!(daily_samples(&readings, 5).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_representative_sample_averages_days() {
        let readings = vec![
            reading(1, 12, 0.0, "Clear"),
            reading(2, 12, 20.0, "Rain"),
        ];
        let summary = summarize(&readings, 5).unwrap();
        assert_eq!(summary.days.len(), 2);
        assert_eq!(summary.sample, WeatherSample::new(10, "clear"));
        assert_eq!(summary.range, TemperatureRange { min: 0, avg: 10, max: 20 });
    }

    #[test]
    fn test_representative_sample_rounds_half_up() {
        let days = vec![
            DailySample {
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                sample: WeatherSample::new(-4, "snow"),
            },
            DailySample {
                date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
                sample: WeatherSample::new(1, "clear"),
            },
        ];
        // (-4 + 1) / 2 = -1.5
        assert_eq!(representative_sample(&days).unwrap(), WeatherSample::new(-1, "snow"));
        assert!(representative_sample(&[]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_summarize_range() {
        let readings = vec![
            reading(1, 6, -1.6, "snow"),
            reading(1, 12, 3.0, "snow"),
            reading(2, 12, 4.4, "clouds"),
        ];
        let range = summarize_range(&readings).unwrap();
        assert_eq!(range, TemperatureRange { min: -2, avg: 2, max: 4 });
    }
}
