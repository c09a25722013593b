//! Job dashboard entry point
//!
//! Wires the HTTP job source and the console ports into the controller,
//! loads the full dataset, then reads search terms line by line from stdin:
//! a plain line filters, an empty line restores the unfiltered view,
//! `:sort <column>` re-sorts the list, `:quit` exits.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobdash::services::{ConsoleListPort, ConsoleMapPort, ConsoleStatsPort, HttpJobSource};
use jobdash::{DashboardController, SortColumn};

#[derive(Parser, Debug)]
#[command(name = "jobdash")]
#[command(about = "Job dashboard over the jobs HTTP API")]
struct Args {
    /// Base URL of the jobs API
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!(api_url = %args.api_url, "starting job dashboard");

    let source = HttpJobSource::new(args.api_url);
    let controller = DashboardController::new(
        source,
        ConsoleListPort,
        ConsoleMapPort,
        ConsoleStatsPort,
    );

    if let Err(e) = controller.load().await {
        // Error states are already rendered on the ports; the controller
        // stays usable, so keep accepting searches.
        info!("initial load failed: {e}");
    }

    println!("\nType a search term and press Enter (empty line resets, :sort <column> sorts, :quit exits)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if input == ":quit" {
            break;
        }

        if let Some(column) = input.strip_prefix(":sort ") {
            match column.trim().parse::<SortColumn>() {
                Ok(column) => controller.sort_by(column).await,
                Err(message) => println!("{message}"),
            }
            continue;
        }

        controller.filter(input).await;
    }

    info!("job dashboard stopped");
    Ok(())
}
