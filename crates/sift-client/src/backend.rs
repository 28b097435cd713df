//! The backend seam used by [`SessionStore`](crate::SessionStore).

use std::future::Future;

use sift_core::ids::{FileId, IndexId};
use sift_core::responses::{CreateIndexResponse, Payload, SearchResponse, UploadResponse};

use crate::error::ApiError;
use crate::upload::UploadFile;

/// The four workflow endpoints of the document-indexing backend.
///
/// [`HttpBackend`](crate::HttpBackend) is the production implementation.
pub trait IndexBackend: Send + Sync {
    /// Upload a file and receive its split results.
    fn upload(
        &self,
        file: UploadFile,
    ) -> impl Future<Output = Result<UploadResponse, ApiError>> + Send;

    /// Record one batch of selected chunks for `file_id`.
    fn select_chunks(
        &self,
        file_id: &FileId,
        chunks: &[String],
    ) -> impl Future<Output = Result<Payload, ApiError>> + Send;

    /// Build a vector index from every chunk selected for `file_id`.
    fn create_index(
        &self,
        file_id: &FileId,
    ) -> impl Future<Output = Result<CreateIndexResponse, ApiError>> + Send;

    fn search(
        &self,
        index_id: &IndexId,
        query: &str,
        top_k: usize,
    ) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send;
}
