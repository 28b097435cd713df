//! Search result records.
//!
//! The backend answers a search with one of two record shapes: plain passages
//! ranked by similarity, or a single LLM-generated answer that carries the
//! passages it was grounded on. Anything else is kept verbatim.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::IndexId;

/// A passage returned by vector search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Passage {
    pub text: String,
    #[serde(default)]
    pub similarity: f64,
    /// Present on multi-index searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_id: Option<IndexId>,
}

/// One record of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SearchHit {
    /// A direct answer synthesized from the top passages.
    Answer {
        answer: String,
        #[serde(default)]
        is_direct_answer: bool,
        #[serde(default)]
        source_texts: Vec<Passage>,
    },
    Passage(Passage),
    Other(serde_json::Value),
}

impl SearchHit {
    /// Text to show for this hit: the answer, the passage text, or `None`.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::Answer { answer, .. } => Some(answer),
            Self::Passage(passage) => Some(&passage.text),
            Self::Other(_) => None,
        }
    }

    /// Similarity score of a passage hit.
    #[must_use]
    pub const fn similarity(&self) -> Option<f64> {
        match self {
            Self::Passage(passage) => Some(passage.similarity),
            Self::Answer { .. } | Self::Other(_) => None,
        }
    }
}
