//! Summary statistics over a forecast window.
//!
//! Days without a temperature reading are skipped by every temperature
//! statistic; they are never treated as 0°F.

use std::cmp::Ordering;

use crate::model::DayReading;

/// Minimum precipitation fraction for a day to count as a precipitation day.
pub const DEFAULT_PRECIPITATION_THRESHOLD: f64 = 0.1;

/// Direction of day-over-day temperature change across a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
    /// Temperatures both rose and fell.
    Mixed,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Steady => "steady",
            Trend::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean temperature over the days that have one, or `None` if no day does.
pub fn average_temperature(days: &[DayReading]) -> Option<f64> {
    let (sum, count) = days
        .iter()
        .filter_map(|d| d.temperature_f)
        .fold((0.0, 0usize), |(sum, count), t| (sum + t, count + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Number of days whose precipitation fraction reaches `threshold`.
pub fn precipitation_days(days: &[DayReading], threshold: f64) -> usize {
    days.iter().filter(|d| d.precipitation >= threshold).count()
}

/// Classify the temperature trend by comparing consecutive days.
///
/// A pair is only compared when both days have a temperature. Returns
/// `None` when no pair could be compared.
pub fn classify_trend(days: &[DayReading]) -> Option<Trend> {
    let mut rose = false;
    let mut fell = false;
    let mut compared = false;

    for pair in days.windows(2) {
        let (Some(prev), Some(next)) = (pair[0].temperature_f, pair[1].temperature_f) else {
            continue;
        };
        compared = true;
        match next.partial_cmp(&prev) {
            Some(Ordering::Greater) => rose = true,
            Some(Ordering::Less) => fell = true,
            Some(Ordering::Equal) | None => {}
        }
    }

    if !compared {
        return None;
    }

    Some(match (rose, fell) {
        (true, true) => Trend::Mixed,
        (true, false) => Trend::Rising,
        (false, true) => Trend::Falling,
        (false, false) => Trend::Steady,
    })
}

/// Everything the summary section of a weather report shows.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub days: usize,
    pub days_with_temperature: usize,
    pub average_temperature_f: Option<f64>,
    pub precipitation_days: usize,
    pub precipitation_threshold: f64,
    pub trend: Option<Trend>,
}

impl WeatherSummary {
    pub fn from_forecast(days: &[DayReading], threshold: f64) -> Self {
        Self {
            days: days.len(),
            days_with_temperature: days.iter().filter(|d| d.temperature_f.is_some()).count(),
            average_temperature_f: average_temperature(days),
            precipitation_days: precipitation_days(days, threshold),
            precipitation_threshold: threshold,
            trend: classify_trend(days),
        }
    }
}
