//! Human-readable rendering of every report the CLI prints.

use std::fmt::Write;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use drill_core::{
    CountSelection, DayReading, Lookup, TextStats, WeatherRecord, WeatherSummary,
    receipt::{Receipt, format_cents},
};

pub fn render_weather(lookup: &Lookup, threshold: f64) -> Result<String> {
    let record = match lookup {
        Lookup::Found(record) => record,
        Lookup::NotFound { city, message } => return Err(anyhow!("{message}: {city}")),
    };

    let summary = WeatherSummary::from_forecast(&record.forecast, threshold);

    let mut out = String::new();
    render_current(&mut out, record);
    out.push('\n');
    render_forecast(&mut out, &record.forecast);
    out.push('\n');
    render_summary(&mut out, &summary);
    Ok(out)
}

fn render_current(out: &mut String, record: &WeatherRecord) {
    let now = &record.current;
    let _ = writeln!(out, "Current weather in {}:", record.city);
    let _ = writeln!(out, "  {}", now.description);
    let _ = writeln!(out, "  Temperature:   {}", temperature(now.temperature_f));
    let _ = writeln!(out, "  Precipitation: {}", percent(now.precipitation));
    let _ = writeln!(out, "  Humidity:      {}", percent(now.humidity));
}

fn render_forecast(out: &mut String, days: &[DayReading]) {
    let _ = writeln!(out, "Forecast:");
    if days.is_empty() {
        let _ = writeln!(out, "  (no forecast)");
        return;
    }

    for day in days {
        let _ = writeln!(
            out,
            "  {:<16} {:<10} {:>6}  precip {:>4}  humidity {:>4}",
            day_label(day.date.as_deref()),
            day.description,
            temperature(day.temperature_f),
            percent(day.precipitation),
            percent(day.humidity),
        );
    }
}

fn render_summary(out: &mut String, summary: &WeatherSummary) {
    let _ = writeln!(out, "Summary:");

    let average = match summary.average_temperature_f {
        Some(avg) => format!(
            "{avg:.1}°F (over {} of {} days)",
            summary.days_with_temperature, summary.days
        ),
        None => "n/a (no temperature readings)".to_string(),
    };
    let _ = writeln!(out, "  Average temperature: {average}");
    let _ = writeln!(
        out,
        "  Precipitation days:  {} (at least {})",
        summary.precipitation_days,
        percent(summary.precipitation_threshold),
    );

    let trend = summary.trend.map_or("unknown", |t| t.as_str());
    let _ = writeln!(out, "  Temperature trend:   {trend}");
}

fn temperature(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |t| format!("{t:.0}°F"))
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn day_label(date: Option<&str>) -> String {
    match date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => d.format("%a %Y-%m-%d").to_string(),
            Err(_) => raw.to_string(),
        },
        None => "-".to_string(),
    }
}

pub fn render_counts(
    stats: &TextStats,
    selection: CountSelection,
    top: bool,
    name: Option<&str>,
) -> String {
    let selection = selection.resolved();
    let mut out = String::new();

    if let Some(name) = name {
        let _ = writeln!(out, "{name}:");
    }
    if top {
        let word = match &stats.most_common {
            Some(w) => format!("{} ({})", w.word, w.count),
            None => "(none)".to_string(),
        };
        let _ = writeln!(out, "Most common word: {word}");
    }
    if selection.lines {
        let _ = writeln!(out, "Total lines:      {}", stats.lines);
    }
    if selection.words {
        let _ = writeln!(out, "Total words:      {}", stats.words);
    }
    if selection.chars {
        let _ = writeln!(out, "Total chars:      {}", stats.chars);
    }
    out
}

pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();
    for (i, cents) in receipt.orders.iter().enumerate() {
        let _ = writeln!(out, "Total for order #{}: {}", i + 1, format_cents(*cents));
    }
    let _ = writeln!(out, "Total for all orders: {}", format_cents(receipt.total));
    out
}

pub fn render_sqrt_table(rows: &[(u32, f64)]) -> String {
    let mut out = String::new();
    for (n, approx) in rows {
        let _ = writeln!(out, "The square root of {n} is approximately {approx:.2}");
    }
    out
}
