#![doc = "topics-uploader: bulk-load topic records from a local JSON file into Firestore."]

//! This crate contains the full pipeline: load a JSON array of topics, upsert
//! each one into the `topics` collection via the Firestore REST API, and
//! report per-item and aggregate outcomes.
//!
//! # Usage
//! Use the `topics-uploader` binary, or call [`cli::run`] with a constructed
//! [`cli::Cli`] for programmatic/integration use.

pub mod cli;
pub mod firestore;
pub mod store;
pub mod topics;
pub mod upload;
