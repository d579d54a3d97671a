mod api;
mod cli_messages;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod metrics;
mod poller;
mod runtime;
mod session;
mod ui;

use crate::api::{MetricsApi, MetricsClient};
use crate::environment::Environment;
use crate::metrics::{format_currency, format_grouped};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Base URL of the metrics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Run without the terminal UI, logging refresh events to the console.
        #[arg(long)]
        headless: bool,
    },
    /// Fetch each metrics endpoint once and print the results
    Check {
        /// Base URL of the metrics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start { api_url, headless } => {
            let environment = Environment::resolve(api_url);
            let session = setup_session(environment);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Check { api_url } => {
            let environment = Environment::resolve(api_url);
            run_check(environment).await
        }
    }
}

/// Fetches both metrics endpoints once and prints a plain-text report.
///
/// Fails with a non-zero exit status if either endpoint is unreachable, so
/// the command can back a health probe in scripts.
async fn run_check(environment: Environment) -> Result<(), Box<dyn Error>> {
    let client = MetricsClient::new(environment);
    crate::print_cmd_info!(
        "Check",
        "Fetching campaign metrics from {}",
        client.environment().api_base_url()
    );

    match tokio::try_join!(client.fetch_summary(), client.fetch_realtime()) {
        Ok((summary, realtime)) => {
            crate::print_cmd_success!("Summary", "{} rows from /metrics/summary", summary.len());
            for record in &summary {
                println!("  {}", record.table_cells().join(" | "));
            }
            let conversions: u64 = summary.iter().map(|r| r.total_conversions).sum();
            println!("  Total conversions: {}", format_grouped(conversions));

            crate::print_cmd_success!(
                "Realtime",
                "{} buckets from /metrics/realtime",
                realtime.len()
            );
            if let Some(latest) = realtime.last() {
                println!(
                    "  Latest bucket {}: {} impressions, {} clicks, {} conversions, {} spend",
                    latest.minute,
                    format_grouped(latest.impressions),
                    format_grouped(latest.clicks),
                    latest.conversions,
                    format_currency(latest.spend)
                );
            }
            Ok(())
        }
        Err(e) => {
            crate::print_cmd_error!("Failed to fetch data", &e.to_string());
            Err(e.into())
        }
    }
}
