// Repository trait for telemetry dataset access
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// List all available dataset identifiers
    async fn list_dataset_ids(&self) -> anyhow::Result<Vec<String>>;

    /// Fetch one raw telemetry document by dataset identifier
    async fn fetch_document(&self, dataset_id: &str) -> anyhow::Result<Value>;
}
