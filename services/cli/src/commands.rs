use chrono::NaiveDate;
use clap::Args;
use hpjournal::config::AppConfig;
use hpjournal::error::AppError;
use hpjournal::ingest::TrackerCsvImporter;
use hpjournal::render::{render_journal, RenderOptions};
use hpjournal::telemetry;
use std::path::PathBuf;
use tracing::info;

/// Capacity overrides shared by every command that builds tiers. Values
/// layer over the environment configuration.
#[derive(Args, Debug, Default)]
pub(crate) struct ScheduleArgs {
    /// Override the Initial tier capacity
    #[arg(long)]
    pub(crate) initial_cap: Option<f64>,
    /// Override the Average tier capacity
    #[arg(long)]
    pub(crate) average_cap: Option<f64>,
    /// Override the Dominant tier capacity
    #[arg(long)]
    pub(crate) dominant_cap: Option<f64>,
    /// Override the capacity of each Extra Slot tier
    #[arg(long)]
    pub(crate) extra_cap: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct NamesArgs {
    /// Tracker CSV export to read
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Tracker CSV export to read
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Collection to build the journal for
    #[arg(long)]
    pub(crate) collection: String,
    /// Start from the Initial tier (first journal for this collection)
    #[arg(long)]
    pub(crate) initial_tier: bool,
    /// Wrap records in blockquotes instead of centered divs
    #[arg(long)]
    pub(crate) blockquotes: bool,
    /// Group records under per-activity headings with subtotals
    #[arg(long)]
    pub(crate) subcategory_headings: bool,
    /// Write the markup here instead of stdout
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
    /// Stamp the output with a generation date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) generated_on: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) schedule: ScheduleArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Tracker CSV export to read
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Collection to summarize
    #[arg(long)]
    pub(crate) collection: String,
    /// Start from the Initial tier (first journal for this collection)
    #[arg(long)]
    pub(crate) initial_tier: bool,
    /// Emit the report as pretty JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) schedule: ScheduleArgs,
}

pub(crate) fn run_names(args: NamesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let registry = TrackerCsvImporter::from_path(&args.csv)?;
    for name in registry.names() {
        println!("{name}");
    }

    Ok(())
}

pub(crate) fn run_generate(mut args: GenerateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_schedule_overrides(&mut config, &mut args.schedule);
    telemetry::init(&config.telemetry)?;
    let schedule = config.schedule.build()?;

    let mut registry = TrackerCsvImporter::from_path(&args.csv)?;
    let collection = registry
        .find_by_name_mut(&args.collection)
        .ok_or_else(|| AppError::UnknownCollection {
            name: args.collection.clone(),
        })?;
    collection.rebuild_tiers(args.initial_tier, &schedule)?;

    let options = RenderOptions {
        blockquotes: args.blockquotes,
        subcategory_headings: args.subcategory_headings,
    };
    let html = render_journal(&collection.report(), options, args.generated_on);

    info!(
        collection = %collection.name(),
        tiers = collection.tiers().len(),
        "journal generated"
    );

    match args.out {
        Some(path) => std::fs::write(path, html)?,
        None => println!("{html}"),
    }

    Ok(())
}

pub(crate) fn run_report(mut args: ReportArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_schedule_overrides(&mut config, &mut args.schedule);
    telemetry::init(&config.telemetry)?;
    let schedule = config.schedule.build()?;

    let mut registry = TrackerCsvImporter::from_path(&args.csv)?;
    let collection = registry
        .find_by_name_mut(&args.collection)
        .ok_or_else(|| AppError::UnknownCollection {
            name: args.collection.clone(),
        })?;
    collection.rebuild_tiers(args.initial_tier, &schedule)?;
    let record_count = collection.records().len();
    let report = collection.report();

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("report unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    println!("Collection: {}", report.name);
    println!(
        "Grand total: {} HP across {} records",
        report.grand_total, record_count
    );

    for tier in &report.tiers {
        println!(
            "\n{} ({} HP of {} capacity)",
            tier.label, tier.reported_total, tier.capacity
        );
        if tier.carried_in > 0.0 {
            println!("- carried in: {} HP", tier.carried_in);
        }
        if tier.overflow > 0.0 {
            println!("- overflow: {} HP", tier.overflow);
        }
        println!("- records: {}", tier.records.len());
        for entry in &tier.subtotals {
            println!("  - {}: {} HP", entry.subcategory, entry.total);
        }
    }

    if let Some(last) = report.tiers.last() {
        if last.overflow > 0.0 {
            println!(
                "\nOverflow after the last section stays unplaced: {} HP",
                last.overflow
            );
        }
    }

    Ok(())
}

fn apply_schedule_overrides(config: &mut AppConfig, args: &mut ScheduleArgs) {
    if let Some(cap) = args.initial_cap.take() {
        config.schedule.initial_cap = cap;
    }
    if let Some(cap) = args.average_cap.take() {
        config.schedule.average_cap = cap;
    }
    if let Some(cap) = args.dominant_cap.take() {
        config.schedule.dominant_cap = cap;
    }
    if let Some(cap) = args.extra_cap.take() {
        config.schedule.extra_cap = cap;
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_and_rejects_noise() {
        let parsed = parse_date(" 2026-08-25 ").expect("date parses");
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date"));

        assert!(parse_date("25/08/2026").is_err());
        assert!(parse_date("soon").is_err());
    }

    #[test]
    fn cli_caps_win_over_configured_ones() {
        let mut config = AppConfig {
            telemetry: hpjournal::config::TelemetryConfig {
                log_level: "info".to_string(),
            },
            schedule: hpjournal::config::ScheduleConfig {
                initial_cap: 75.0,
                average_cap: 250.0,
                dominant_cap: 300.0,
                extra_cap: 100.0,
            },
        };
        let mut args = ScheduleArgs {
            initial_cap: Some(80.0),
            extra_cap: Some(120.0),
            ..ScheduleArgs::default()
        };

        apply_schedule_overrides(&mut config, &mut args);

        assert_eq!(config.schedule.initial_cap, 80.0);
        assert_eq!(config.schedule.average_cap, 250.0);
        assert_eq!(config.schedule.dominant_cap, 300.0);
        assert_eq!(config.schedule.extra_cap, 120.0);
    }
}
