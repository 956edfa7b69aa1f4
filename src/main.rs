use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tillflow::engine::aggregate::SummarySnapshot;
use tillflow::engine::ingest::{IngestError, ingest_records, read_file};
use tillflow::logging;
use tillflow::shared::config::CONFIG;
use tillflow::shared::datetime::HourBucketer;
use tracing::error;

/// Ingest a point-of-sale CSV export and print its aggregate summary.
#[derive(Debug, Parser)]
#[command(name = "tillflow", version)]
struct Cli {
    /// CSV file with a header row
    file: PathBuf,

    /// Emit the full summary snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init()?;
    let cli = Cli::parse();

    let records = match read_file(&cli.file) {
        Ok(records) => records,
        Err(err) => {
            error!(file = %cli.file.display(), %err, "failed to read input");
            eprintln!("error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let bucketer = HourBucketer::new(&CONFIG.time);

    match ingest_records(&records, &bucketer) {
        Ok(report) => {
            print_stats(report.stats.total, report.stats.valid, report.stats.invalid);
            print_issues(&report.issues);

            match report.summary {
                Some(summary) => {
                    let snapshot = SummarySnapshot::from_aggregates(&summary);
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&snapshot)?);
                    } else {
                        print_snapshot(&snapshot);
                    }
                }
                None => println!("no valid rows; nothing to summarize"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(IngestError::TooManyRows {
            limit,
            stats,
            issues,
        }) => {
            eprintln!("error: row count exceeds maximum allowed ({limit})");
            print_stats(stats.total, stats.valid, stats.invalid);
            print_issues(&issues);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            error!(%err, "ingest failed");
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_stats(total: usize, valid: usize, invalid: usize) {
    println!("rows: {total} total, {valid} valid, {invalid} excluded");
}

fn print_issues(issues: &[tillflow::engine::core::ParseIssue]) {
    if issues.is_empty() {
        return;
    }

    let limit = CONFIG.ingest.max_display_issues;
    println!("issues (showing up to {limit}):");
    for issue in issues.iter().take(limit) {
        println!("  line {}: {}", issue.index, issue.message);
    }
}

fn print_snapshot(snapshot: &SummarySnapshot) {
    println!(
        "total: signedTotal={} signedQty={} count={}",
        snapshot.total.signed_total, snapshot.total.signed_qty, snapshot.total.count
    );
    println!(
        "cancelled: count={} amount={}",
        snapshot.cancelled.count, snapshot.cancelled.amount
    );

    for (label, entries) in [
        ("by name", &snapshot.top_by_name),
        ("by pricemode", &snapshot.top_by_pricemode),
        ("by hour", &snapshot.top_by_hour),
    ] {
        println!("top {label}:");
        for entry in entries {
            println!(
                "  {}: signedTotal={} signedQty={} count={}",
                entry.key, entry.signed_total, entry.signed_qty, entry.count
            );
        }
    }
}
