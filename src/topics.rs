/// `topics` module: loads the local topic data file into typed records.
///
/// This module is the only place where untrusted input JSON is parsed and
/// mapped to the internal [`Topic`] type.
///
/// # Responsibilities
/// - Read the whole input file into memory (no streaming; the record set is
///   small and is materialized before any upload begins)
/// - Parse it as a JSON array of topic objects
/// - Ensure robust error messages for CLI and tests: any failure in loading
///   must result in clear diagnostics and abort the run before any write.
///
/// # Errors
/// All errors in this module use `anyhow::Error` for context-rich diagnostics,
/// and are surfaced at the CLI boundary as fatal (exit code 1).
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// A single topic record from the input file.
///
/// Only `id` (the document key) and `title` (used in log lines) are required;
/// every other field is carried through to the remote document verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Reads the input file and parses it as a JSON array of [`Topic`] records.
///
/// A missing file or invalid JSON is fatal: the caller must not attempt any
/// upload, and no summary is printed for the run.
pub fn load_topics<P: AsRef<Path>>(path: P) -> Result<Vec<Topic>> {
    let path_ref = path.as_ref();
    info!(input_path = ?path_ref, "Loading topics from file");

    let contents = match fs::read_to_string(path_ref) {
        Ok(contents) => {
            info!(input_path = ?path_ref, "Topics file read successfully");
            contents
        }
        Err(e) => {
            error!(error = ?e, input_path = ?path_ref, "Failed to read topics file");
            return Err(anyhow::anyhow!(
                "Failed to read topics file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let topics: Vec<Topic> = match serde_json::from_str(&contents) {
        Ok(topics) => topics,
        Err(e) => {
            error!(error = ?e, input_path = ?path_ref, "Failed to parse topics JSON");
            return Err(anyhow::anyhow!("Failed to parse topics JSON: {e}"));
        }
    };

    info!(count = topics.len(), "Parsed topics from input file");
    Ok(topics)
}
