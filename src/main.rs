//! drivecheck - Find file names and paths a sync service will reject.
//!
//! Usage:
//!   drivecheck PATH                  Check PATH, write results.txt
//!   drivecheck PATH -o audit.txt     Write the report somewhere else
//!   drivecheck PATH --format json    Print the grouped report as JSON
//!   drivecheck --help                Show help

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use drivecheck_core::{CheckConfig, DEFAULT_REPORT_FILE};
use drivecheck_report::{Report, Summary};
use drivecheck_scan::{TreeWalker, WalkProgress};

#[derive(Parser)]
#[command(
    name = "drivecheck",
    version,
    about = "Find file names and paths a sync service will reject",
    long_about = "drivecheck walks a folder and reports every file name or path that \
                  breaks common cloud-drive naming rules: reserved device names, \
                  forbidden or unprintable characters, leading or trailing spaces, \
                  trailing periods and overly long paths.\n\n\
                  Problems are grouped by reason and written to a report file."
)]
struct Cli {
    /// Folder to check
    path: PathBuf,

    /// Report file to write when problems are found
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Don't print a line for every folder checked
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Console output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CheckConfig::builder()
        .root(cli.path)
        .report_path(cli.output)
        .show_progress(!cli.quiet && matches!(cli.format, OutputFormat::Text))
        .build()
        .wrap_err("Invalid configuration")?;

    run(&config, cli.format, &mut io::stdout())
}

/// Check the configured root and print the outcome to `out`.
///
/// A root that is not an existing directory gets a one-line message and no
/// report.
fn run(config: &CheckConfig, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    if !config.root.is_dir() {
        writeln!(out, "Folder does not exist: {}", config.root.display())?;
        return Ok(());
    }

    let report = check(config)?;
    write_report(&report, &config.report_path, format, out)
}

/// Walk the configured root, printing progress lines when enabled.
fn check(config: &CheckConfig) -> Result<Report> {
    let walker = TreeWalker::new();
    let printer = config
        .show_progress
        .then(|| spawn_progress_printer(walker.subscribe()));

    let result = walker.check(config);

    // Dropping the walker closes the progress channel so the printer exits
    // once it has printed every line.
    drop(walker);
    if let Some(printer) = printer {
        let _ = printer.join();
    }

    let result = result.wrap_err("Check failed")?;
    Ok(Report::from_result(&result))
}

/// Write the report file when there are problems, then the console output.
fn write_report(
    report: &Report,
    report_path: &Path,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    if report.has_problems() {
        std::fs::write(report_path, report.render_text()).wrap_err_with(|| {
            format!("Failed to write report to {}", report_path.display())
        })?;
    }

    match format {
        OutputFormat::Text => {
            if report.has_problems() {
                print_summary(&report.summary, report_path, out)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        }
    }

    Ok(())
}

/// Print a `Checking` line for every directory the walker enters.
fn spawn_progress_printer(
    mut progress_rx: mpsc::UnboundedReceiver<WalkProgress>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        while let Some(progress) = progress_rx.blocking_recv() {
            println!("Checking {}", progress.current_path.display());
        }
    })
}

fn print_summary(summary: &Summary, report_path: &Path, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(49))?;
    writeln!(out, "{} files checked", summary.files_checked)?;
    writeln!(out, "{} directories checked", summary.dirs_checked)?;
    writeln!(out, "{} problems encountered", summary.problems)?;
    writeln!(out, "They can be reviewed in {}", report_path.display())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
