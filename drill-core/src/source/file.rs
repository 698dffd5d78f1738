use anyhow::{Context, Result};
use async_trait::async_trait;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{DrillError, model::WeatherRecord};

use super::{WeatherSource, payload_for};

/// Weather records loaded once from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    records: Vec<WeatherRecord>,
}

impl FileSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| DrillError::DataFile {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<WeatherRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse data file: {}", path.display()))?;

        for record in &records {
            if record.forecast.iter().any(|d| !(0.0..=1.0).contains(&d.precipitation)) {
                warn!(city = %record.city, "precipitation outside 0..=1, is it a percentage?");
            }
        }

        debug!(path = %path.display(), cities = records.len(), "loaded data file");
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WeatherSource for FileSource {
    async fn fetch_json(&self, city: &str) -> Result<String> {
        payload_for(&self.records, city)
    }

    fn cities(&self) -> Vec<String> {
        self.records.iter().map(|r| r.city.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{builtin::BuiltinSource, lookup};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("drill-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = temp_path("does-not-exist.json");
        let err = FileSource::from_path(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to read data file"));
        assert!(err.downcast_ref::<DrillError>().is_some());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileSource::from_path(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(err.to_string().contains("Failed to parse data file"));
    }

    #[tokio::test]
    async fn serves_records_written_from_builtin_table() {
        let path = temp_path("cities.json");
        let builtin = BuiltinSource::new();
        fs::write(&path, serde_json::to_string_pretty(builtin.records()).unwrap()).unwrap();

        let source = FileSource::from_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.cities(), builtin.cities());

        let found = lookup(&source, "Chicago").await.unwrap();
        assert_eq!(found.record(), builtin.records().first());

        let missing = lookup(&source, "Atlantis").await.unwrap();
        assert!(missing.record().is_none());
    }
}
