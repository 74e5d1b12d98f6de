//! riskboard: interactive risk assessment dashboard
//!
//! Renders a fixed risk dataset as terminal charts, either interactively
//! or as a plain report.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use riskboard::{
    cli::{self, DashboardConfig, ReportConfig},
    report::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with dataset and output info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nVisualizations:",
        "\n  heatmap (severity x probability, colored by impact score)",
        "\n  scatter (score-sized markers, fixed axes)",
        "\n  stacked bar (score per feature, colored by risk level)",
        "\n  detail (per-record severity/probability/score)",
        "\n\nOutput Formats:",
        "\n  tui, table, json"
    )
}

#[derive(Parser)]
#[command(name = "riskboard")]
#[command(version, long_version = build_long_version())]
#[command(about = "Interactive risk assessment dashboard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Error occurred
    2  Usage error

EXAMPLES:
    # Launch the interactive dashboard
    riskboard

    # Start with the light theme
    riskboard dashboard --theme light

    # Print the full report as JSON
    riskboard report --format json > report.json

    # Detail report for one record
    riskboard report --record E")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `dashboard` subcommand
#[derive(Parser, Default)]
struct DashboardArgs {
    /// Initial theme (dark, light); overrides the saved preference
    #[arg(long, env = "RISKBOARD_THEME")]
    theme: Option<String>,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    format: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,

    /// Narrow to a single record's detail report
    #[arg(long, value_name = "ID")]
    record: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    Dashboard(DashboardArgs),

    /// Print the risk report without a terminal UI
    Report(ReportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let exit_code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            cli::exit_codes::ERROR
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Dispatch to command handlers.
fn run(command: Option<Commands>) -> Result<i32> {
    let exit_code = match command {
        Some(Commands::Dashboard(args)) => cli::run_dashboard_command(&DashboardConfig {
            theme: args.theme,
        })?,

        Some(Commands::Report(args)) => cli::run_report(&ReportConfig {
            format: args.format,
            output: args.output,
            record: args.record,
        })?,

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "riskboard", &mut io::stdout());
            cli::exit_codes::SUCCESS
        }

        // No subcommand launches the dashboard
        None => cli::run_dashboard_command(&DashboardConfig::default())?,
    };

    Ok(exit_code)
}
