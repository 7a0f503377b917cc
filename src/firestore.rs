#![doc = "Firestore integration: bridges the store trait to the Firestore REST API, facilitating upsert of topic documents into the fixed collection."]
//
//! # Firestore Client
//!
//! This module wires up the [`TopicStore`] trait for real use against the
//! Firestore REST v1 API. Each upsert is a single `commit` call containing a
//! full-document `update` (create-or-replace by document name) plus an
//! `updateTransforms` entry that sets the `createdAt` field to the server's
//! request time. The timestamp is therefore assigned by Firestore at write
//! time, never by the local clock, and is refreshed on every re-run.
//!
//! ## Client Usage
//!
//! - Construct [`FirestoreClient`] using environment variables
//!   (`FIRESTORE_PROJECT_ID`, `FIRESTORE_ACCESS_TOKEN`).
//! - `FIRESTORE_BASE_URL` may point the client at an emulator or fake server
//!   for testing; it defaults to the public endpoint.
//! - All transport, serialization, and error handling are encapsulated here.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::env;

use crate::store::{StoreError, TopicStore};
use crate::topics::Topic;

/// Target collection; every document this tool writes lives under it.
pub const COLLECTION: &str = "topics";

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl FirestoreClient {
    /// Constructs a client from the environment. Missing variables are a
    /// fatal construction error: the run must not proceed without a usable
    /// session.
    pub fn new_from_env() -> Result<Self, StoreError> {
        dotenvy::dotenv().ok(); // loads environment variables from .env if present
        match (
            env::var("FIRESTORE_PROJECT_ID"),
            env::var("FIRESTORE_ACCESS_TOKEN"),
        ) {
            (Ok(project_id), Ok(access_token)) => {
                let base_url = env::var("FIRESTORE_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
                tracing::info!(
                    project_id = %project_id,
                    token_set = !access_token.is_empty(),
                    base_url = %base_url,
                    "Initialized FirestoreClient from environment"
                );
                Ok(FirestoreClient {
                    http: reqwest::Client::new(),
                    base_url,
                    project_id,
                    access_token,
                })
            }
            (Err(e), _) => {
                tracing::error!(error = ?e, "FIRESTORE_PROJECT_ID missing in environment");
                Err(format!("FIRESTORE_PROJECT_ID missing in environment: {e}").into())
            }
            (_, Err(e)) => {
                tracing::error!(error = ?e, "FIRESTORE_ACCESS_TOKEN missing in environment");
                Err(format!("FIRESTORE_ACCESS_TOKEN missing in environment: {e}").into())
            }
        }
    }

    /// Fully qualified document name for a topic id, as the commit API
    /// expects it in the write body.
    fn document_name(&self, id: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/{}/{}",
            self.project_id, COLLECTION, id
        )
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents:commit",
            self.base_url, self.project_id
        )
    }

    /// Builds the single-write commit body: full-document update plus the
    /// server-time transform on `createdAt`.
    fn commit_body(&self, topic: &Topic) -> Value {
        json!({
            "writes": [{
                "update": {
                    "name": self.document_name(&topic.id),
                    "fields": topic_fields(topic),
                },
                "updateTransforms": [{
                    "fieldPath": "createdAt",
                    "setToServerValue": "REQUEST_TIME",
                }],
            }]
        })
    }
}

#[async_trait]
impl TopicStore for FirestoreClient {
    async fn upsert_topic(&self, topic: &Topic) -> Result<(), StoreError> {
        tracing::info!(
            topic_id = %topic.id,
            title = %topic.title,
            "Upserting topic document"
        );

        let response = self
            .http
            .post(self.commit_url())
            .bearer_auth(&self.access_token)
            .json(&self.commit_body(topic))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, topic_id = %topic.id, "Transport error during commit");
                StoreError::from(format!("transport error: {e}"))
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(topic_id = %topic.id, "Successfully upserted topic document");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                topic_id = %topic.id,
                status = %status,
                body = %body,
                "Firestore rejected commit"
            );
            Err(format!("Firestore error ({status}): {}", server_message(&body)).into())
        }
    }
}

/// Extracts `error.message` from a Firestore error response, falling back to
/// the raw body when it is not the expected JSON shape.
fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Encodes all of a topic's fields (`id`, `title`, and every passthrough
/// field) into the Firestore `fields` map.
fn topic_fields(topic: &Topic) -> Value {
    let mut fields = Map::new();
    fields.insert("id".to_string(), json!({ "stringValue": topic.id }));
    fields.insert("title".to_string(), json!({ "stringValue": topic.title }));
    for (key, value) in &topic.extra {
        fields.insert(key.clone(), encode_value(value));
    }
    Value::Object(fields)
}

/// Maps a plain JSON value onto Firestore's typed `Value` wire format.
fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            // int64 values travel as strings on the Firestore wire.
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let mut fields = Map::new();
            for (key, nested) in map {
                fields.insert(key.clone(), encode_value(nested));
            }
            json!({ "mapValue": { "fields": fields } })
        }
    }
}
