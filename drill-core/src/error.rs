use std::path::PathBuf;

use thiserror::Error;

/// Errors callers of `drill-core` may want to match on.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("Unknown data source '{0}'. Supported sources: builtin, file.")]
    UnknownSource(String),

    #[error(
        "No data file configured for the 'file' source.\n\
         Hint: run `drill configure` and enter the path to a JSON data file."
    )]
    MissingDataFile,

    #[error("Failed to read data file {}", path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Precipitation threshold {0} is outside the 0..=1 range")]
    InvalidThreshold(f64),

    #[error("'{item}' is not on the menu (order #{order})")]
    UnknownMenuItem { order: usize, item: String },
}
