//! # store: interface for upserting topic documents
//!
//! This module defines a single trait ([`TopicStore`]) abstracting the remote
//! document store, so the upload driver can run against the real Firestore
//! client, a local stand-in, or a mock in tests.
//!
//! ## Interface & Extensibility
//! - Implement the [`TopicStore`] trait to create new store backends.
//! - The method is async and returns a boxed error type.
//! - Error handling is uniform: all transport/server errors return boxed
//!   trait objects carrying the remote message.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so consumers can generate
//!   deterministic mocks for unit/integration tests.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::topics::Topic;

/// Error type for store operations (simple boxed error).
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for writing topic documents into the backing store.
///
/// The implementor is responsible for authentication, transport, and
/// attaching the server-assigned creation timestamp. The trait itself is
/// agnostic of those details.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Create or fully replace the document keyed by `topic.id` in the
    /// `topics` collection (last-write-wins upsert).
    async fn upsert_topic(&self, topic: &Topic) -> Result<(), StoreError>;
}
