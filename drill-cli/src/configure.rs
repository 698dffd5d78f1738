use std::path::PathBuf;

use anyhow::{Context, Result};
use drill_core::{Config, SourceId, summary::DEFAULT_PRECIPITATION_THRESHOLD};
use inquire::{CustomType, Select, Text};

/// Interactively update and save the configuration.
pub fn run_configure() -> Result<()> {
    let mut config = Config::load()?;

    let sources: Vec<SourceId> = SourceId::all().to_vec();
    let start = config
        .default_source_id()
        .ok()
        .and_then(|current| sources.iter().position(|id| *id == current))
        .unwrap_or(0);
    let source = Select::new("Data source:", sources)
        .with_starting_cursor(start)
        .prompt()
        .context("Data source selection aborted")?;
    config.set_default_source(source);

    if source == SourceId::File {
        let current = config
            .data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let path = Text::new("Path to JSON data file:")
            .with_initial_value(&current)
            .prompt()
            .context("Data file prompt aborted")?;
        config.data_file = Some(PathBuf::from(path.trim()));
    }

    let city = Text::new("Default city (empty for none):")
        .with_initial_value(config.default_city.as_deref().unwrap_or_default())
        .prompt()
        .context("Default city prompt aborted")?;
    config.default_city = Some(city.trim().to_string()).filter(|c| !c.is_empty());

    let threshold = CustomType::<f64>::new("Precipitation threshold (fraction, 0..=1):")
        .with_default(config.precipitation_threshold.unwrap_or(DEFAULT_PRECIPITATION_THRESHOLD))
        .with_error_message("Please enter a number such as 0.1")
        .prompt()
        .context("Threshold prompt aborted")?;
    config.precipitation_threshold = Some(threshold);
    config.threshold()?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
