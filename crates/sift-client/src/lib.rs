//! # sift-client
//!
//! Client for the docsift document-indexing backend.
//!
//! - [`HttpBackend`] speaks the backend's multipart/JSON HTTP API
//! - [`IndexBackend`] is the seam between the workflow and the transport
//! - [`SessionStore`] runs the upload → select → index → search workflow over
//!   one [`Session`](sift_core::session::Session)
//!
//! ```no_run
//! use sift_client::{HttpBackend, SessionStore, UploadFile};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SessionStore::new(HttpBackend::with_base_url("http://localhost:8000")?);
//! let cancel = CancellationToken::new();
//!
//! store.upload_file(UploadFile::open("notes.md").await?, &cancel).await?;
//! store.select_all_chunks();
//! store.submit_selected_chunks(&cancel).await?;
//! store.create_index(&cancel).await?;
//! if let Some(found) = store.search_vectors("what changed?", &cancel).await? {
//!     println!("{} hits", found.results.len());
//! }
//! # Ok(())
//! # }
//! ```

mod backend;
mod client;
mod error;
mod http;
mod store;
mod upload;

pub use backend::IndexBackend;
pub use client::HttpBackend;
pub use error::{ApiError, Operation, StoreError};
pub use store::SessionStore;
pub use upload::{SUPPORTED_EXTENSIONS, UploadFile};
