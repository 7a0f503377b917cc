use anyhow::Result;
use clap::Parser;
use topics_uploader::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing for the CLI.
    tracing_subscriber::fmt::init();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("Upload run completed successfully"),
        Err(e) => tracing::error!(error = %e, "Upload run exited with error"),
    }
    result
}
