//! Session store: the upload → select → index → search workflow.
//!
//! A [`SessionStore`] owns exactly one [`Session`] and publishes every change
//! through a `watch` channel. Networked operations are serialized by an
//! internal lock, so two calls never interleave their writes, and each one
//! races its requests against a caller-supplied [`CancellationToken`].
//!
//! Every networked operation follows the same shape:
//! - precondition not met: return `Ok(None)` without touching state
//! - set `is_loading`, clear `error`
//! - on failure record the message in `error` and return the error
//! - clear `is_loading` on every exit path, including a dropped future

use tokio::sync::{Mutex, watch};
use tokio_util::sync::CancellationToken;

use sift_core::responses::{
    CreateIndexResponse, Payload, SearchResponse, SubmitSummary, UploadResponse,
};
use sift_core::session::Session;
use sift_core::{SEARCH_TOP_K, SELECT_BATCH_SIZE, batch_count};

use crate::backend::IndexBackend;
use crate::error::{Operation, StoreError};
use crate::upload::UploadFile;

pub struct SessionStore<B> {
    backend: B,
    state: watch::Sender<Session>,
    op_lock: Mutex<()>,
}

/// Holds `is_loading` for the lifetime of one operation.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<Session>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<Session>) -> Self {
        state.send_modify(|session| {
            session.is_loading = true;
            session.error = None;
        });
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|session| session.is_loading = false);
    }
}

impl<B: IndexBackend> SessionStore<B> {
    /// Store with an empty session.
    pub fn new(backend: B) -> Self {
        Self::with_session(backend, Session::default())
    }

    /// Store resuming an existing session, e.g. one with a known index id.
    pub fn with_session(backend: B, session: Session) -> Self {
        let (state, _) = watch::channel(session);
        Self {
            backend,
            state,
            op_lock: Mutex::new(()),
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver that observes every session change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Upload `file` and store the returned file id and split results.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] with the server's detail or
    /// `file upload failed`, or [`StoreError::Cancelled`]. The session's
    /// `file_id` is unchanged on failure.
    pub async fn upload_file(
        &self,
        file: UploadFile,
        cancel: &CancellationToken,
    ) -> Result<UploadResponse, StoreError> {
        let _op = self.op_lock.lock().await;
        let _loading = LoadingGuard::start(&self.state);
        tracing::info!(file = file.file_name(), bytes = file.len(), "uploading file");

        let resp = self
            .run(Operation::Upload, cancel, self.backend.upload(file))
            .await?;

        tracing::info!(
            file_id = %resp.file_id,
            entries = resp.split_results.len(),
            "upload complete"
        );
        self.state.send_modify(|session| {
            session.file_id = Some(resp.file_id.clone());
            session.split_results.clone_from(&resp.split_results);
        });
        Ok(resp)
    }

    /// Submit the selection in batches of [`SELECT_BATCH_SIZE`], one batch at
    /// a time.
    ///
    /// Returns `Ok(None)` without any request when nothing is selected or no
    /// file has been uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Batch`] naming the first failing batch; no later
    /// batch is sent and earlier batches stay recorded on the backend. Returns
    /// [`StoreError::Cancelled`] if `cancel` fires between or during batches.
    pub async fn submit_selected_chunks(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<SubmitSummary>, StoreError> {
        let _op = self.op_lock.lock().await;
        let (file_id, chunks) = {
            let session = self.state.borrow();
            match &session.file_id {
                Some(file_id) if session.has_selected_chunks() => {
                    (file_id.clone(), session.selected_chunks.clone())
                }
                _ => return Ok(None),
            }
        };
        let _loading = LoadingGuard::start(&self.state);

        let total_batches = batch_count(chunks.len());
        tracing::info!(%file_id, chunks = chunks.len(), total_batches, "submitting selected chunks");

        let mut processed = 0;
        let mut last_response = Payload::new();
        for (index, batch) in chunks.chunks(SELECT_BATCH_SIZE).enumerate() {
            let number = index + 1;
            tracing::debug!(batch = number, total_batches, size = batch.len(), "submitting batch");

            let result = cancel
                .run_until_cancelled(self.backend.select_chunks(&file_id, batch))
                .await;
            match result {
                Some(Ok(resp)) => {
                    last_response = resp;
                    processed += batch.len();
                }
                Some(Err(source)) => {
                    return Err(self.fail(StoreError::batch(number, total_batches, source)));
                }
                None => {
                    tracing::warn!(batch = number, processed, "chunk submission cancelled");
                    return Err(self.fail(StoreError::Cancelled {
                        operation: Operation::SubmitChunks,
                    }));
                }
            }
        }

        tracing::info!(%file_id, processed, "all chunk batches submitted");
        Ok(Some(SubmitSummary::new(processed, total_batches, last_response)))
    }

    /// Create the vector index for the uploaded file.
    ///
    /// Returns `Ok(None)` without any request unless chunks are selected, a
    /// file is uploaded, and no index was created yet in this session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] with the server's detail or
    /// `index creation failed`, or [`StoreError::Cancelled`].
    pub async fn create_index(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<CreateIndexResponse>, StoreError> {
        let _op = self.op_lock.lock().await;
        let file_id = {
            let session = self.state.borrow();
            match &session.file_id {
                Some(file_id) if session.can_create_index() => file_id.clone(),
                _ => return Ok(None),
            }
        };
        let _loading = LoadingGuard::start(&self.state);
        tracing::info!(%file_id, "creating index");

        let resp = self
            .run(Operation::CreateIndex, cancel, self.backend.create_index(&file_id))
            .await?;

        tracing::info!(%file_id, index_id = %resp.index_id, "index created");
        self.state.send_modify(|session| {
            session.index_id = Some(resp.index_id.clone());
            session.index_created = true;
        });
        Ok(Some(resp))
    }

    /// Search the session's index for `query` with `top_k` fixed at
    /// [`SEARCH_TOP_K`], replacing the previous results.
    ///
    /// Returns `Ok(None)` without any request when there is no index or the
    /// query is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] with the server's detail or
    /// `vector search failed`, or [`StoreError::Cancelled`].
    pub async fn search_vectors(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<SearchResponse>, StoreError> {
        let _op = self.op_lock.lock().await;
        let index_id = {
            let session = self.state.borrow();
            match &session.index_id {
                Some(index_id) if !query.is_empty() => index_id.clone(),
                _ => return Ok(None),
            }
        };
        let _loading = LoadingGuard::start(&self.state);
        tracing::info!(%index_id, query, "searching index");

        let resp = self
            .run(
                Operation::Search,
                cancel,
                self.backend.search(&index_id, query, SEARCH_TOP_K),
            )
            .await?;

        tracing::info!(%index_id, hits = resp.results.len(), "search complete");
        self.state.send_modify(|session| {
            session.search_results.clone_from(&resp.results);
        });
        Ok(Some(resp))
    }

    /// Clear the session back to empty. `is_loading` is left alone.
    pub fn reset(&self) {
        tracing::debug!("resetting session");
        self.state.send_modify(Session::reset);
    }

    /// Replace the selection. Duplicates keep their first position.
    pub fn select_chunks<I, S>(&self, chunks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state
            .send_modify(|session| session.set_selection(chunks));
    }

    /// Select every chunk of the uploaded file. Returns the selection size.
    pub fn select_all_chunks(&self) -> usize {
        let mut selected = 0;
        self.state.send_modify(|session| {
            session.select_all();
            selected = session.selected_chunks.len();
        });
        selected
    }

    /// Toggle one chunk. Returns whether it is selected afterwards.
    pub fn toggle_chunk(&self, chunk: &str) -> bool {
        let mut selected = false;
        self.state.send_modify(|session| selected = session.toggle(chunk));
        selected
    }

    pub fn clear_selection(&self) {
        self.state
            .send_modify(|session| session.selected_chunks.clear());
    }

    /// Await `request` unless cancelled, converting failures for `operation`.
    async fn run<T>(
        &self,
        operation: Operation,
        cancel: &CancellationToken,
        request: impl Future<Output = Result<T, crate::ApiError>>,
    ) -> Result<T, StoreError> {
        match cancel.run_until_cancelled(request).await {
            Some(Ok(value)) => Ok(value),
            Some(Err(source)) => Err(self.fail(StoreError::request(operation, source))),
            None => Err(self.fail(StoreError::Cancelled { operation })),
        }
    }

    /// Record `error` in the session and hand it back.
    fn fail(&self, error: StoreError) -> StoreError {
        tracing::warn!(operation = %error.operation(), %error, "operation failed");
        let message = error.to_string();
        self.state
            .send_modify(|session| session.error = Some(message));
        error
    }
}
