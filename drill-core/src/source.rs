use crate::{
    Config, DrillError,
    model::{Lookup, LookupPayload, WeatherRecord},
    source::{builtin::BuiltinSource, file::FileSource},
};
use anyhow::Context;
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};
use tracing::debug;

pub mod builtin;
pub mod file;

/// Payload a source returns for a city it does not know.
pub const CITY_NOT_FOUND: &str = "City not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    Builtin,
    File,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Builtin => "builtin",
            SourceId::File => "file",
        }
    }

    pub const fn all() -> &'static [SourceId] {
        &[SourceId::Builtin, SourceId::File]
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SourceId {
    type Error = DrillError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "builtin" => Ok(SourceId::Builtin),
            "file" => Ok(SourceId::File),
            _ => Err(DrillError::UnknownSource(value.to_string())),
        }
    }
}

/// A stand-in for a weather API: hands out serialized records by city name.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Serialized payload for `city`. Unknown cities produce the
    /// `{"error": ...}` marker rather than an `Err`.
    async fn fetch_json(&self, city: &str) -> anyhow::Result<String>;

    /// City names this source knows, in storage order.
    fn cities(&self) -> Vec<String>;
}

/// Fetch `city` from `source` and parse the payload back into structured data.
pub async fn lookup(source: &dyn WeatherSource, city: &str) -> anyhow::Result<Lookup> {
    let body = source.fetch_json(city).await?;
    let payload: LookupPayload = serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse weather payload for '{city}'"))?;

    let lookup = Lookup::from_payload(city, payload);
    debug!(city, found = lookup.record().is_some(), "weather lookup");
    Ok(lookup)
}

/// Serialize the record whose `city` matches exactly, or the not-found marker.
pub(crate) fn payload_for(records: &[WeatherRecord], city: &str) -> anyhow::Result<String> {
    let body = match records.iter().find(|r| r.city == city) {
        Some(record) => serde_json::to_string(record),
        None => serde_json::to_string(&LookupPayload::Error {
            error: CITY_NOT_FOUND.to_string(),
        }),
    };

    body.with_context(|| format!("Failed to serialize weather payload for '{city}'"))
}

/// Construct a source from config and explicit SourceId.
pub fn source_from_config(id: SourceId, config: &Config) -> anyhow::Result<Box<dyn WeatherSource>> {
    let boxed: Box<dyn WeatherSource> = match id {
        SourceId::Builtin => Box::new(BuiltinSource::new()),
        SourceId::File => {
            let path = config.data_file.as_deref().ok_or(DrillError::MissingDataFile)?;
            Box::new(FileSource::from_path(path)?)
        }
    };

    Ok(boxed)
}

/// Construct the default source from config, using the `default_source` field.
pub fn default_source_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherSource>> {
    let id = config.default_source_id()?;
    source_from_config(id, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn source_id_as_str_roundtrip() {
        for id in SourceId::all() {
            let parsed = SourceId::try_from(id.as_str()).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn source_id_is_case_insensitive() {
        assert_eq!(SourceId::try_from("BuiltIn").unwrap(), SourceId::Builtin);
    }

    #[test]
    fn unknown_source_error() {
        let err = SourceId::try_from("openweather").unwrap_err();
        assert!(err.to_string().contains("Unknown data source"));
    }

    #[test]
    fn file_source_errors_without_data_file() {
        let cfg = Config::default();
        let err = source_from_config(SourceId::File, &cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No data file configured"));
        assert!(msg.contains("Hint: run `drill configure`"));
    }

    #[test]
    fn default_source_falls_back_to_builtin() {
        let cfg = Config::default();
        let source = default_source_from_config(&cfg).expect("builtin needs no config");
        assert_eq!(source.cities(), vec!["Chicago", "New York", "Seattle"]);
    }

    #[tokio::test]
    async fn lookup_parses_record_for_known_city() {
        let source = BuiltinSource::new();
        let lookup = lookup(&source, "Seattle").await.unwrap();

        let record = lookup.record().expect("Seattle is a builtin city");
        assert_eq!(record.city, "Seattle");
        assert_eq!(record.forecast.len(), 4);
    }

    #[tokio::test]
    async fn lookup_returns_not_found_for_unknown_city() {
        let source = BuiltinSource::new();
        let lookup = lookup(&source, "Atlantis").await.unwrap();

        match lookup {
            Lookup::NotFound { city, message } => {
                assert_eq!(city, "Atlantis");
                assert_eq!(message, CITY_NOT_FOUND);
            }
            Lookup::Found(record) => panic!("unexpected record for {}", record.city),
        }
    }

    #[derive(Debug)]
    struct Garbled;

    #[async_trait]
    impl WeatherSource for Garbled {
        async fn fetch_json(&self, _city: &str) -> anyhow::Result<String> {
            Ok("{\"city\": 12".to_string())
        }

        fn cities(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let err = lookup(&Garbled, "Chicago").await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse weather payload for 'Chicago'"));
    }
}
