use std::future::Future;

use anyhow::Context;
use sift_client::{HttpBackend, SessionStore};
use sift_config::SiftConfig;
use tokio_util::sync::CancellationToken;

/// Shared resources for networked commands.
pub struct AppContext {
    pub config: SiftConfig,
    pub backend: HttpBackend,
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn init(config: SiftConfig, cancel: CancellationToken) -> anyhow::Result<Self> {
        let backend = HttpBackend::new(&config.backend).with_context(|| {
            format!("failed to build backend client for {}", config.backend.base_url)
        })?;
        tracing::debug!(origin = backend.origin(), "backend client ready");
        Ok(Self {
            config,
            backend,
            cancel,
        })
    }

    /// Fresh session store over a clone of the shared client.
    pub fn store(&self) -> SessionStore<HttpBackend> {
        SessionStore::new(self.backend.clone())
    }

    /// Await `request` unless the user interrupts first.
    pub async fn until_cancelled<T, E>(
        &self,
        request: impl Future<Output = Result<T, E>>,
    ) -> anyhow::Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self.cancel.run_until_cancelled(request).await {
            Some(result) => Ok(result?),
            None => anyhow::bail!("operation cancelled"),
        }
    }
}
