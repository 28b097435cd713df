//! Candidate chunks produced by the backend after an upload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One source text and the chunks it was split into.
///
/// Tabular uploads (csv, xlsx) produce one entry per non-empty row of the first
/// text column and carry the row index. Plain text uploads produce a single
/// entry without `row_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SplitResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_id: Option<u64>,
    pub original_text: String,
    #[serde(default)]
    pub chunks: Vec<String>,
}

impl SplitResult {
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tabular_and_text_entries() {
        let json = r#"[
            {"row_id": 3, "original_text": "a. b.", "chunks": ["a.", " b."]},
            {"original_text": "plain", "chunks": ["plain"]}
        ]"#;
        let results: Vec<SplitResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results[0].row_id, Some(3));
        assert_eq!(results[0].chunk_count(), 2);
        assert!(results[1].row_id.is_none());
    }

    #[test]
    fn missing_chunks_default_to_empty() {
        let result: SplitResult = serde_json::from_str(r#"{"original_text": ""}"#).unwrap();
        assert!(result.chunks.is_empty());
    }
}
