//! `reqwest` implementation of the backend API.

use reqwest::multipart::Form;
use serde_json::Value;
use sift_config::BackendConfig;
use sift_core::ids::{FileId, IndexId};
use sift_core::responses::{
    BannerResponse, CreateIndexResponse, IndexListResponse, Payload, RemoteConfigResponse,
    SearchResponse, UploadResponse,
};

use crate::backend::IndexBackend;
use crate::error::ApiError;
use crate::http::{check_response, decode};
use crate::upload::UploadFile;

/// HTTP client for the document-indexing backend.
///
/// Every request body is multipart form data, except the remote config update
/// which is JSON. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    origin: String,
}

impl HttpBackend {
    /// Build a client from backend settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL fails validation, or
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            origin: config.origin().to_string(),
        })
    }

    /// Client for `base_url` with default settings otherwise.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&BackendConfig {
            base_url: base_url.into(),
            ..BackendConfig::default()
        })
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let resp = self.http.post(self.url(path)).multipart(form).send().await?;
        decode(check_response(resp).await?).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self.http.get(self.url(path)).send().await?;
        decode(check_response(resp).await?).await
    }

    /// Service banner from `GET /`, used as a health check.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn banner(&self) -> Result<BannerResponse, ApiError> {
        self.get("/").await
    }

    /// Every index stored on the backend.
    ///
    /// # Errors
    ///
    /// See [`Self::banner`].
    pub async fn list_indices(&self) -> Result<IndexListResponse, ApiError> {
        self.get("/api/list-indices").await
    }

    /// Search several indices at once.
    ///
    /// # Errors
    ///
    /// See [`Self::banner`]. The backend answers 400 when `index_ids` is empty
    /// and 404 when one of them does not exist.
    pub async fn search_many(
        &self,
        index_ids: &[IndexId],
        query: &str,
        top_k: usize,
    ) -> Result<SearchResponse, ApiError> {
        let form = index_ids
            .iter()
            .fold(Form::new().text("query", query.to_string()), |form, id| {
                form.text("index_ids", id.to_string())
            })
            .text("top_k", top_k.to_string());
        self.post_form("/api/semantic-search-multi", form).await
    }

    /// Current LLM and embedding-model configuration of the backend.
    ///
    /// # Errors
    ///
    /// See [`Self::banner`].
    pub async fn remote_config(&self) -> Result<RemoteConfigResponse, ApiError> {
        self.get("/api/config").await
    }

    /// Merge `updates` into the backend's model configuration. Nested objects
    /// are merged one level deep by the backend; other values replace.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `updates` is not a JSON object, otherwise
    /// see [`Self::banner`].
    pub async fn update_remote_config(
        &self,
        updates: &Value,
    ) -> Result<RemoteConfigResponse, ApiError> {
        if !updates.is_object() {
            return Err(ApiError::Parse(
                "config updates must be a JSON object".to_string(),
            ));
        }
        tracing::debug!(path = "/api/config", "POST");
        let resp = self
            .http
            .post(self.url("/api/config"))
            .json(updates)
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }
}

impl IndexBackend for HttpBackend {
    async fn upload(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        let form = Form::new().part("file", file.into_part()?);
        self.post_form("/api/upload", form).await
    }

    async fn select_chunks(&self, file_id: &FileId, chunks: &[String]) -> Result<Payload, ApiError> {
        let form = chunks
            .iter()
            .fold(Form::new().text("file_id", file_id.to_string()), |form, chunk| {
                form.text("selected_chunks", chunk.clone())
            });
        self.post_form("/api/select-chunks", form).await
    }

    async fn create_index(&self, file_id: &FileId) -> Result<CreateIndexResponse, ApiError> {
        let form = Form::new().text("file_id", file_id.to_string());
        self.post_form("/api/create-index", form).await
    }

    async fn search(
        &self,
        index_id: &IndexId,
        query: &str,
        top_k: usize,
    ) -> Result<SearchResponse, ApiError> {
        let form = Form::new()
            .text("index_id", index_id.to_string())
            .text("query", query.to_string())
            .text("top_k", top_k.to_string());
        self.post_form("/api/search", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let backend = HttpBackend::new(&BackendConfig::default()).unwrap();
        assert_eq!(backend.origin(), "http://localhost:8000");
        assert_eq!(backend.url("/api/search"), "http://localhost:8000/api/search");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = HttpBackend::with_base_url("localhost").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn update_rejects_non_object() {
        let backend = HttpBackend::new(&BackendConfig::default()).unwrap();
        let err = backend
            .update_remote_config(&serde_json::json!(["llm_type"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
