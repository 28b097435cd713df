//! Backend response payloads.
//!
//! Every endpoint answers with a JSON object carrying a human-readable
//! `message` plus endpoint-specific fields. Only the fields the client acts on
//! are typed; `/api/select-chunks` is treated as an opaque object.

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{FileId, IndexId};
use crate::search::SearchHit;
use crate::split::SplitResult;

/// Untyped JSON object as returned by endpoints the client does not interpret.
pub type Payload = Map<String, Value>;

/// Response from `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub file_id: FileId,
    #[serde(default)]
    pub split_results: Vec<SplitResult>,
}

/// Outcome of submitting every selected chunk in batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubmitSummary {
    pub message: String,
    pub total_processed: usize,
    pub batch_count: usize,
    /// Body of the last batch's response.
    pub last_response: Payload,
}

impl SubmitSummary {
    #[must_use]
    pub fn new(total_processed: usize, batch_count: usize, last_response: Payload) -> Self {
        Self {
            message: format!("submitted all selected chunks ({total_processed} total)"),
            total_processed,
            batch_count,
            last_response,
        }
    }

    /// The last batch's response with `message` and `total_processed` overlaid.
    #[must_use]
    pub fn merged(&self) -> Payload {
        let mut merged = self.last_response.clone();
        merged.insert("message".into(), Value::String(self.message.clone()));
        merged.insert("total_processed".into(), Value::from(self.total_processed));
        merged
    }
}

/// Response from `POST /api/create-index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateIndexResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub index_id: IndexId,
    #[serde(default)]
    pub chunk_count: Option<usize>,
}

/// Response from `POST /api/search` and `POST /api/semantic-search-multi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// Metadata for one index stored on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndexSummary {
    pub index_id: IndexId,
    pub file_id: FileId,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// `llm` or `tfidf`.
    #[serde(default)]
    pub embedding_type: Option<String>,
    #[serde(default)]
    pub texts: Vec<String>,
}

impl IndexSummary {
    #[must_use]
    pub fn text_count(&self) -> usize {
        self.texts.len()
    }
}

/// Response from `GET /api/list-indices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndexListResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub indices: Vec<IndexSummary>,
}

/// Response from `GET /api/config` and `POST /api/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RemoteConfigResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub config: Value,
}

/// Response from `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BannerResponse {
    pub message: String,
}
