//! Subcommand implementations.

use std::fs::File;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::{debug, info, info_span, trace};

use sighting_cli::config::Settings;
use sighting_cli::logging::redact_value;
use sighting_cli::render::{duration_table, frame_table, stats_table};
use sighting_ingest::{load_or_build, load_snapshot};
use sighting_model::{DecadeSelector, FilterSpec, ShapeCategory, SightingTable};
use sighting_normalize::normalize_duration;
use sighting_query::{SummaryKind, apply_filters, summarize, table_frame};

use crate::cli::{DurationArgs, PreprocessArgs, QueryArgs};

pub fn run_preprocess(args: &PreprocessArgs, settings: &Settings) -> Result<()> {
    let cache_dir = cache_dir(args.cache_dir.as_deref(), settings);
    let span = info_span!("preprocess", source = %args.source.display());
    let _guard = span.enter();
    let start = Instant::now();

    let outcome = load_or_build(
        &args.source,
        &cache_dir,
        &settings.preprocess_options(),
        args.force,
    )
    .with_context(|| format!("build snapshot from {}", args.source.display()))?;

    info!(
        rows = outcome.table.len(),
        reused = outcome.reused(),
        duration_ms = start.elapsed().as_millis(),
        "snapshot ready"
    );

    println!("Source: {}", args.source.display());
    println!("Snapshot: {}", cache_dir.display());
    match &outcome.stats {
        Some(stats) => println!("{}", stats_table(stats)),
        None => println!(
            "Snapshot is current ({} reports, built {}); use --force to rebuild.",
            outcome.manifest.row_count,
            outcome.manifest.created_at.format("%Y-%m-%d %H:%M UTC")
        ),
    }
    Ok(())
}

pub fn run_query(args: &QueryArgs, settings: &Settings) -> Result<()> {
    let decade = DecadeSelector::parse(&args.decade, &settings.filters)
        .with_context(|| format!("invalid --decade (choices: {})", settings.filters.labels().join(", ")))?;
    let spec = FilterSpec::new(
        args.shapes.iter().copied().map(ShapeCategory::from),
        args.duration.into(),
        decade,
    );

    let table = load_table(args, settings)?;
    let span = info_span!("query", filter = %spec);
    let _guard = span.enter();

    let view = apply_filters(&table, &spec);
    info!(total = table.len(), matched = view.len(), "filters applied");
    for report in view.iter().take(5) {
        trace!(
            date_time = %report.date_time,
            shape = %report.shape,
            summary = redact_value(&report.summary),
            "matched report"
        );
    }

    println!("Filter: {spec}");
    println!("Matched {} of {} reports", view.len(), table.len());

    if let Some(path) = &args.export {
        export_csv(&view, path)?;
        println!("Exported: {}", path.display());
    }

    if let Some(kind) = args.summary {
        let kind = SummaryKind::from(kind);
        let df = summarize(&view, kind, &settings.summary)
            .with_context(|| format!("build {kind} summary"))?;
        println!("{} ({})", kind, kind.description());
        println!("{}", frame_table(&df, args.rows));
        if df.height() > args.rows {
            println!("... {} more rows", df.height() - args.rows);
        }
    }
    Ok(())
}

pub fn run_duration(args: &DurationArgs) -> Result<()> {
    let results: Vec<_> = args
        .inputs
        .iter()
        .map(|input| {
            let seconds = normalize_duration(input);
            debug!(input = redact_value(input), seconds = ?seconds.map(NonZeroU64::get), "normalized");
            (input.clone(), seconds)
        })
        .collect();
    println!("{}", duration_table(&results));
    Ok(())
}

fn cache_dir(arg: Option<&Path>, settings: &Settings) -> PathBuf {
    arg.map_or_else(|| settings.ingest.cache_dir.clone(), Path::to_path_buf)
}

fn load_table(args: &QueryArgs, settings: &Settings) -> Result<SightingTable> {
    let cache_dir = cache_dir(args.cache_dir.as_deref(), settings);
    if let Some(source) = &args.source {
        let outcome = load_or_build(source, &cache_dir, &settings.preprocess_options(), false)
            .with_context(|| format!("build snapshot from {}", source.display()))?;
        return Ok(outcome.table);
    }
    let (_, table) = load_snapshot(&cache_dir).with_context(|| {
        format!(
            "load snapshot from {} (run `sightings preprocess <CSV>` first)",
            cache_dir.display()
        )
    })?;
    Ok(table)
}

fn export_csv(table: &SightingTable, path: &Path) -> Result<()> {
    let mut df = table_frame(table).context("build export frame")?;
    let mut file =
        File::create(path).with_context(|| format!("create export file {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write export file {}", path.display()))?;
    Ok(())
}
