//! Client and session-store error types.

use std::fmt;

use thiserror::Error;

/// Errors raised while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The `detail` message from the JSON error body, if any.
        detail: Option<String>,
    },

    /// A success response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured backend origin is not usable.
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Server-supplied detail message, if the failure carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// A networked session-store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Upload,
    SubmitChunks,
    CreateIndex,
    Search,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::SubmitChunks => "submit_chunks",
            Self::CreateIndex => "create_index",
            Self::Search => "search",
        }
    }

    /// Message recorded when the backend gives no detail.
    /// Batch failures use [`StoreError::Batch`] instead.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Upload => "file upload failed",
            Self::SubmitChunks => "chunk submission failed",
            Self::CreateIndex => "index creation failed",
            Self::Search => "vector search failed",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`SessionStore`](crate::SessionStore) operations.
///
/// `Display` is the human-readable message that is also recorded in
/// `Session::error`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A single-request operation failed.
    #[error("{message}")]
    Request {
        operation: Operation,
        message: String,
        #[source]
        source: ApiError,
    },

    /// Chunk batch `batch` (1-indexed) failed; later batches were not sent.
    #[error("{message}")]
    Batch {
        batch: usize,
        total_batches: usize,
        message: String,
        #[source]
        source: ApiError,
    },

    /// The caller cancelled the operation before it finished.
    #[error("operation cancelled")]
    Cancelled { operation: Operation },
}

impl StoreError {
    /// Wrap a backend failure, preferring the server's detail message.
    #[must_use]
    pub fn request(operation: Operation, source: ApiError) -> Self {
        let message = source
            .detail()
            .map_or_else(|| operation.default_message().to_string(), str::to_string);
        Self::Request {
            operation,
            message,
            source,
        }
    }

    /// Wrap a failed chunk batch, preferring the server's detail message.
    #[must_use]
    pub fn batch(batch: usize, total_batches: usize, source: ApiError) -> Self {
        let message = source
            .detail()
            .map_or_else(|| format!("failed to submit chunk batch {batch}"), str::to_string);
        Self::Batch {
            batch,
            total_batches,
            message,
            source,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Request { operation, .. } | Self::Cancelled { operation } => *operation,
            Self::Batch { .. } => Operation::SubmitChunks,
        }
    }

    /// The 1-indexed batch that failed, for batch failures.
    #[must_use]
    pub const fn failed_batch(&self) -> Option<usize> {
        match self {
            Self::Batch { batch, .. } => Some(*batch),
            _ => None,
        }
    }
}
