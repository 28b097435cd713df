//! Client-held workflow state for one upload-to-search session.
//!
//! ```text
//! empty → uploaded → (chunks submitted, server side only) → indexed → searched
//!   ↑________________________ reset ___________________________________|
//! ```
//!
//! The stages are informational. The only enforced rules are the operation
//! guards: no index is created twice until [`Session::reset`], and searches
//! need an index id.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{FileId, IndexId};
use crate::search::SearchHit;
use crate::split::SplitResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Session {
    pub file_id: Option<FileId>,
    pub split_results: Vec<SplitResult>,
    /// Selected chunks in selection order, without duplicates.
    pub selected_chunks: Vec<String>,
    pub index_id: Option<IndexId>,
    pub index_created: bool,
    pub search_results: Vec<SearchHit>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Where a session is in the upload-to-search workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Empty,
    Uploaded,
    Indexed,
    Searched,
}

impl Session {
    #[must_use]
    pub fn has_selected_chunks(&self) -> bool {
        !self.selected_chunks.is_empty()
    }

    /// True when an index may be created: chunks are selected, a file is
    /// uploaded, and no index exists yet for this session.
    #[must_use]
    pub fn can_create_index(&self) -> bool {
        self.has_selected_chunks() && self.file_id.is_some() && !self.index_created
    }

    /// Every chunk of every split result, in upload order.
    pub fn all_chunks(&self) -> impl Iterator<Item = &str> {
        self.split_results
            .iter()
            .flat_map(|result| result.chunks.iter().map(String::as_str))
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        if self.index_created && !self.search_results.is_empty() {
            Stage::Searched
        } else if self.index_created {
            Stage::Indexed
        } else if self.file_id.is_some() {
            Stage::Uploaded
        } else {
            Stage::Empty
        }
    }

    /// Replace the selection, keeping the first occurrence of each chunk.
    pub fn set_selection<I, S>(&mut self, chunks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        self.selected_chunks = chunks
            .into_iter()
            .map(Into::into)
            .filter(|chunk| seen.insert(chunk.clone()))
            .collect();
    }

    /// Select every chunk from the split results.
    pub fn select_all(&mut self) {
        let all: Vec<String> = self.all_chunks().map(str::to_string).collect();
        self.set_selection(all);
    }

    /// Add `chunk` to the selection, or remove it if already selected.
    /// Returns whether the chunk is selected afterwards.
    pub fn toggle(&mut self, chunk: &str) -> bool {
        if let Some(pos) = self.selected_chunks.iter().position(|c| c == chunk) {
            self.selected_chunks.remove(pos);
            false
        } else {
            self.selected_chunks.push(chunk.to_string());
            true
        }
    }

    /// Clear every field back to its empty value, except `is_loading`.
    pub fn reset(&mut self) {
        *self = Self {
            is_loading: self.is_loading,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Passage;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn uploaded(chunks: &[&str]) -> Session {
        Session {
            file_id: Some(FileId::new("doc.txt")),
            split_results: vec![SplitResult {
                row_id: None,
                original_text: chunks.concat(),
                chunks: chunks.iter().map(ToString::to_string).collect(),
            }],
            ..Session::default()
        }
    }

    #[rstest]
    #[case::nothing_selected(false, true, false, false)]
    #[case::no_file(true, false, false, false)]
    #[case::already_indexed(true, true, true, false)]
    #[case::ready(true, true, false, true)]
    fn can_create_index_guard(
        #[case] selected: bool,
        #[case] has_file: bool,
        #[case] indexed: bool,
        #[case] expected: bool,
    ) {
        let mut session = uploaded(&["a", "b"]);
        if selected {
            session.select_all();
        }
        if !has_file {
            session.file_id = None;
        }
        session.index_created = indexed;
        assert_eq!(session.can_create_index(), expected);
    }

    #[test]
    fn selection_is_deduplicated_in_order() {
        let mut session = uploaded(&["a", "b", "a", "c"]);
        session.select_all();
        assert_eq!(session.selected_chunks, vec!["a", "b", "c"]);

        session.set_selection(["c", "c", "a"]);
        assert_eq!(session.selected_chunks, vec!["c", "a"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut session = Session::default();
        assert!(session.toggle("x"));
        assert!(session.has_selected_chunks());
        assert!(!session.toggle("x"));
        assert!(!session.has_selected_chunks());
    }

    #[test]
    fn stage_follows_workflow() {
        let mut session = Session::default();
        assert_eq!(session.stage(), Stage::Empty);

        session = uploaded(&["a"]);
        assert_eq!(session.stage(), Stage::Uploaded);

        session.index_id = Some(IndexId::new("idx"));
        session.index_created = true;
        assert_eq!(session.stage(), Stage::Indexed);

        session.search_results = vec![SearchHit::Passage(Passage {
            text: "a".into(),
            similarity: 1.0,
            index_id: None,
        })];
        assert_eq!(session.stage(), Stage::Searched);
    }

    #[test]
    fn reset_keeps_only_loading_flag() {
        let mut session = uploaded(&["a", "b"]);
        session.select_all();
        session.index_id = Some(IndexId::new("idx"));
        session.index_created = true;
        session.error = Some("boom".into());
        session.is_loading = true;

        session.reset();

        assert_eq!(
            session,
            Session {
                is_loading: true,
                ..Session::default()
            }
        );
    }
}
