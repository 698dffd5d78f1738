use anyhow::Result;
use async_trait::async_trait;

use crate::model::{DayReading, WeatherRecord};

use super::{WeatherSource, payload_for};

/// Fixed in-memory weather table, read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct BuiltinSource {
    records: Vec<WeatherRecord>,
}

impl BuiltinSource {
    pub fn new() -> Self {
        Self { records: builtin_records() }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }
}

impl Default for BuiltinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for BuiltinSource {
    async fn fetch_json(&self, city: &str) -> Result<String> {
        payload_for(&self.records, city)
    }

    fn cities(&self) -> Vec<String> {
        self.records.iter().map(|r| r.city.clone()).collect()
    }
}

fn day(
    date: Option<&str>,
    description: &str,
    temperature_f: Option<f64>,
    precipitation: f64,
    humidity: f64,
) -> DayReading {
    DayReading {
        date: date.map(str::to_string),
        description: description.to_string(),
        temperature_f,
        precipitation,
        humidity,
    }
}

fn builtin_records() -> Vec<WeatherRecord> {
    vec![
        WeatherRecord {
            city: "Chicago".to_string(),
            current: day(None, "clear sky", Some(62.0), 0.0, 0.77),
            forecast: vec![
                day(Some("2022-05-02"), "clear sky", Some(62.0), 0.0, 0.77),
                day(Some("2022-05-03"), "cloudy", Some(52.0), 0.0, 0.80),
                day(Some("2022-05-04"), "showers", Some(53.0), 0.4, 0.82),
                day(Some("2022-05-05"), "rain", Some(55.0), 0.8, 0.85),
            ],
        },
        WeatherRecord {
            city: "New York".to_string(),
            current: day(None, "clear sky", Some(68.0), 0.0, 0.77),
            forecast: vec![
                day(Some("2022-05-02"), "clear sky", Some(68.0), 0.0, 0.77),
                day(Some("2022-05-03"), "cloudy", Some(58.0), 0.0, 0.80),
                day(Some("2022-05-04"), "sunny", None, 0.0, 0.82),
                day(Some("2022-05-05"), "sunny", None, 0.1, 0.90),
            ],
        },
        WeatherRecord {
            city: "Seattle".to_string(),
            current: day(None, "rain", Some(55.0), 0.8, 0.85),
            forecast: vec![
                day(Some("2022-05-02"), "rain", Some(55.0), 0.8, 0.85),
                day(Some("2022-05-03"), "rain", Some(55.0), 0.8, 0.85),
                day(Some("2022-05-04"), "rain", Some(55.0), 0.8, 0.85),
                day(Some("2022-05-05"), "rain", Some(55.0), 0.8, 0.85),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LookupPayload;

    #[tokio::test]
    async fn every_builtin_city_matches_its_query() {
        let source = BuiltinSource::new();

        for city in source.cities() {
            let body = source.fetch_json(&city).await.unwrap();
            let payload: LookupPayload = serde_json::from_str(&body).unwrap();
            match payload {
                LookupPayload::Record(record) => assert_eq!(record.city, city),
                LookupPayload::Error { error } => panic!("{city}: {error}"),
            }
        }
    }

    #[tokio::test]
    async fn unknown_and_miscased_cities_get_the_error_marker() {
        let source = BuiltinSource::new();

        for city in ["Atlantis", "chicago", "", "New York "] {
            let body = source.fetch_json(city).await.unwrap();
            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value, serde_json::json!({ "error": "City not found" }), "{city:?}");
        }
    }

    #[tokio::test]
    async fn null_temperatures_survive_serialization() {
        let source = BuiltinSource::new();
        let body = source.fetch_json("New York").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert!(value["forecast"][2]["temperature_f"].is_null());
        assert_eq!(value["forecast"][3]["precipitation"], serde_json::json!(0.1));
    }
}
