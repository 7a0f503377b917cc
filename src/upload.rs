//! Coordinating module for the upload run: drives one upsert per topic and
//! tallies outcomes.
//!
//! The driver is strictly sequential: each write is awaited to completion
//! before the next begins, keeping remote-store load predictable. Per-item
//! failures are recovered locally (logged and tallied) and never abort the
//! loop; only errors outside the per-item boundary are fatal to the run.

use tracing::{error, info};

use crate::store::TopicStore;
use crate::topics::Topic;

/// Aggregate tally for one run. Invariant: `succeeded + failed == total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl UploadReport {
    /// Prints the fixed-format summary block and closing message.
    pub fn print_summary(&self) {
        println!("\n=== Upload Summary ===");
        println!("Total topics: {}", self.total);
        println!("Successfully uploaded: {}", self.succeeded);
        println!("Failed: {}", self.failed);
        println!("======================\n");
        println!("Upload process completed!");
    }
}

/// Attempts one upsert per topic, in input order, with no concurrency and no
/// retries. A failed write is recorded and the loop moves on; even a run
/// where every item fails still completes normally.
pub async fn upload_topics(store: &dyn TopicStore, topics: &[Topic]) -> UploadReport {
    println!("Starting to upload {} topics...", topics.len());
    info!(count = topics.len(), "Starting upload run");

    let mut succeeded = 0;
    let mut failed = 0;

    for topic in topics {
        match store.upsert_topic(topic).await {
            Ok(()) => {
                succeeded += 1;
                println!("✓ Uploaded: {}", topic.title);
                info!(topic_id = %topic.id, title = %topic.title, "Topic uploaded");
            }
            Err(e) => {
                failed += 1;
                eprintln!("✗ Failed to upload {}: {}", topic.title, e);
                error!(topic_id = %topic.id, title = %topic.title, error = %e, "Topic upload failed");
            }
        }
    }

    let report = UploadReport {
        total: topics.len(),
        succeeded,
        failed,
    };
    info!(
        total = report.total,
        succeeded = report.succeeded,
        failed = report.failed,
        "Upload run finished"
    );
    report
}
