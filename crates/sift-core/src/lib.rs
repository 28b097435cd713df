//! # sift-core
//!
//! Core types shared by every docsift crate.
//!
//! This crate provides:
//! - The client-held [`Session`](session::Session) for one upload-to-search workflow
//! - Opaque backend identifiers ([`FileId`](ids::FileId), [`IndexId`](ids::IndexId))
//! - Split results and search hits as the backend returns them
//! - Response payloads for every backend endpoint
//! - The static page table ([`Page`](routes::Page))
//! - Workflow constants (batch size, search `top_k`)

pub mod ids;
pub mod responses;
pub mod routes;
pub mod search;
pub mod session;
pub mod split;

/// Maximum number of chunk identifiers sent in one `/api/select-chunks` request.
pub const SELECT_BATCH_SIZE: usize = 500;

/// Number of results requested from `/api/search`.
pub const SEARCH_TOP_K: usize = 5;

/// Number of requests needed to submit `selected` chunks.
#[must_use]
pub const fn batch_count(selected: usize) -> usize {
    selected.div_ceil(SELECT_BATCH_SIZE)
}
