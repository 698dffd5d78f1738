use serde::{Deserialize, Serialize};

/// One day of weather as reported by a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReading {
    /// `YYYY-MM-DD`; absent for the `current` reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub description: String,
    /// Sources may leave this `null` for days without a reading.
    #[serde(default)]
    pub temperature_f: Option<f64>,
    /// Fraction in `[0, 1]`, not a percentage.
    pub precipitation: f64,
    /// Fraction in `[0, 1]`.
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub current: DayReading,
    pub forecast: Vec<DayReading>,
}

/// Wire form of a lookup: either a full record or the `{"error": "..."}` marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupPayload {
    Error { error: String },
    Record(WeatherRecord),
}

/// Parsed result of a city lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(WeatherRecord),
    NotFound { city: String, message: String },
}

impl Lookup {
    pub fn from_payload(city: &str, payload: LookupPayload) -> Self {
        match payload {
            LookupPayload::Record(record) => Lookup::Found(record),
            LookupPayload::Error { error } => Lookup::NotFound {
                city: city.to_string(),
                message: error,
            },
        }
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound { .. } => None,
        }
    }
}
