use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use drill_core::{
    Config, CountSelection, SourceId, WeatherSource,
    receipt::{Menu, Receipt, breakfast_orders},
    source::{default_source_from_config, lookup, source_from_config},
    sqrt::{DEFAULT_RANGE, sqrt_table},
    text::scan_text,
};
use tracing::debug;

use crate::{configure::run_configure, report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "drill", version, about = "Small debugging drills: weather, word counts, receipts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose data source, data file, default city and precipitation threshold.
    Configure,

    /// Show current weather, forecast and summary for a city.
    Weather {
        /// Exact city name, e.g. "New York". Defaults to the configured city.
        city: Option<String>,

        /// Data source, "builtin" or "file"; overrides the configured default.
        #[arg(long)]
        source: Option<String>,
    },

    /// List the cities the data source knows.
    Cities {
        #[arg(long)]
        source: Option<String>,
    },

    /// Count lines, words and characters of a file, or stdin when none is given.
    Wc {
        file: Option<PathBuf>,

        #[arg(short, long)]
        lines: bool,

        #[arg(short, long)]
        words: bool,

        #[arg(short, long)]
        chars: bool,

        /// Also report the most common word.
        #[arg(short, long)]
        top: bool,
    },

    /// Print per-order and overall totals for the breakfast orders.
    Receipt,

    /// Print stepwise square-root approximations for a range of integers.
    Sqrt {
        #[arg(long, default_value_t = DEFAULT_RANGE.start)]
        from: u32,

        /// Exclusive upper bound.
        #[arg(long, default_value_t = DEFAULT_RANGE.end)]
        to: u32,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => run_configure()?,
            Command::Weather { city, source } => {
                let config = Config::load()?;
                let threshold = config.threshold()?;
                let source = resolve_source(&config, source.as_deref())?;
                let city = config.city_or_default(city.as_deref());

                let found = lookup(source.as_ref(), city).await?;
                print!("{}", report::render_weather(&found, threshold)?);
            }
            Command::Cities { source } => {
                let config = Config::load()?;
                let source = resolve_source(&config, source.as_deref())?;
                for city in source.cities() {
                    println!("{city}");
                }
            }
            Command::Wc {
                file,
                lines,
                words,
                chars,
                top,
            } => {
                let text = match &file {
                    Some(path) => fs::read_to_string(path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                    None => {
                        let mut buf = String::new();
                        io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
                        buf
                    }
                };
                debug!(bytes = text.len(), "scanning text");

                let stats = scan_text(&text);
                let selection = CountSelection { lines, words, chars };
                let name = file.as_ref().map(|p| p.display().to_string());
                print!("{}", report::render_counts(&stats, selection, top, name.as_deref()));
            }
            Command::Receipt => {
                let receipt = Receipt::compute(&Menu::breakfast(), &breakfast_orders())?;
                print!("{}", report::render_receipt(&receipt));
            }
            Command::Sqrt { from, to } => {
                if from > to {
                    return Err(anyhow!("--from ({from}) must not exceed --to ({to})"));
                }
                print!("{}", report::render_sqrt_table(&sqrt_table(from..to)));
            }
        }

        Ok(())
    }
}

fn resolve_source(
    config: &Config,
    flag: Option<&str>,
) -> anyhow::Result<Box<dyn WeatherSource>> {
    match flag {
        Some(name) => source_from_config(SourceId::try_from(name)?, config),
        None => default_source_from_config(config),
    }
}
