/// # topics-uploader CLI Interface (Module)
///
/// This module implements the CLI surface for topics-uploader: argument
/// parsing and the async entrypoint that wires the pipeline together.
///
/// ## Features
/// - Entry struct [`Cli`] defines the user-facing options.
/// - Async entrypoint ([`run`]) for programmatic invocation and integration
///   testing; `main` only adds environment/tracing setup around it.
///
/// ## Run semantics
/// - Client construction and input loading are fatal on failure: the error
///   propagates out of [`run`] and the process exits with code 1.
/// - Per-item upload failures are absorbed by the driver; the run still ends
///   with the summary block and exit code 0, even if every item failed.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::firestore::FirestoreClient;
use crate::topics::load_topics;
use crate::upload::upload_topics;

/// CLI for topics-uploader: push topic records into the Firestore `topics`
/// collection.
#[derive(Parser)]
#[clap(
    name = "topics-uploader",
    version,
    about = "Upload topic records from a JSON file into the Firestore topics collection"
)]
pub struct Cli {
    /// Path to the JSON file containing an array of topic records
    #[clap(long, default_value = "topics_data.json")]
    pub input: PathBuf,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    let client = FirestoreClient::new_from_env()
        .map_err(|e| anyhow::anyhow!("Failed to construct Firestore client: {e}"))?;

    let topics = load_topics(&cli.input)?;

    let report = upload_topics(&client, &topics).await;
    report.print_summary();

    Ok(())
}
