use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use collector::fetcher;
use collector::pipeline::{self, PullOptions};
use collector::writer::DEFAULT_OUTPUT_DIR;

/// Pull the OFAC SDN list and regenerate the sanctioned wallet lists.
#[derive(Parser, Debug)]
#[command(name = "collector")]
struct Cli {
    /// Override the SDN publication URL (also via SDN_XML_URL).
    #[arg(long)]
    url: Option<String>,

    /// Directory the list files are written into. Must already exist.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// HTTP timeout for the download, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let options = PullOptions {
        url: cli.url.unwrap_or_else(fetcher::sdn_url),
        output_dir: cli.output_dir,
        timeout: Duration::from_secs(cli.timeout),
    };

    // Failures are reported on the console only; the exit code stays 0
    // either way, matching the behavior downstream cron jobs rely on.
    match pipeline::run(&options).await {
        Ok(report) => {
            tracing::info!(
                target: "pull",
                "wrote {} files covering {} addresses ({} unrecognized)",
                report.files.len(),
                report.total,
                report.unrecognized,
            );
        }
        Err(e) => {
            tracing::error!(target: "pull", "collection aborted: {e}");
        }
    }
    Ok(())
}
