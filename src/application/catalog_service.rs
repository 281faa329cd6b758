// Dataset catalog - the only state shared across requests
use crate::application::dataset_repository::DatasetRepository;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Lazily-populated cache of available dataset identifiers. Refreshed only
/// on an explicit user request, never on a timer.
pub struct DatasetCatalog {
    repository: Arc<dyn DatasetRepository>,
    cache: RwLock<Option<Vec<String>>>,
}

impl DatasetCatalog {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self {
            repository,
            cache: RwLock::new(None),
        }
    }

    /// Cached identifier list, fetched once on first use.
    pub async fn list(&self) -> anyhow::Result<Vec<String>> {
        if let Some(ids) = self.cache.read().await.as_ref() {
            return Ok(ids.clone());
        }
        self.refresh().await
    }

    /// Refetch the identifier list, replacing the cache.
    pub async fn refresh(&self) -> anyhow::Result<Vec<String>> {
        let ids = self.repository.list_dataset_ids().await?;
        tracing::info!(datasets = ids.len(), "refreshed dataset catalog");
        *self.cache.write().await = Some(ids.clone());
        Ok(ids)
    }
}
