// Analysis service - Use case for building charts and exports per dataset
use crate::application::dataset_repository::DatasetRepository;
use crate::application::{chart_builder, export_builder};
use crate::domain::charts::ChartBundle;
use crate::domain::telemetry::{MalformedTelemetry, TelemetryModel};
use crate::domain::workbook::Workbook;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to retrieve dataset `{dataset_id}`")]
    Retrieval {
        dataset_id: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(transparent)]
    Malformed(#[from] MalformedTelemetry),
}

/// Stateless, request-scoped analysis over one retrieved document. Each
/// call is a pure computation once retrieval completes; concurrent requests
/// recompute independently.
#[derive(Clone)]
pub struct AnalysisService {
    repository: Arc<dyn DatasetRepository>,
}

impl AnalysisService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_charts(&self, dataset_id: &str) -> Result<ChartBundle, AnalysisError> {
        let model = self.load_model(dataset_id).await?;
        Ok(chart_builder::build_chart_bundle(dataset_id, &model))
    }

    pub async fn get_workbook(&self, dataset_id: &str) -> Result<Workbook, AnalysisError> {
        let model = self.load_model(dataset_id).await?;
        Ok(export_builder::build_workbook(dataset_id, &model))
    }

    async fn load_model(&self, dataset_id: &str) -> Result<TelemetryModel, AnalysisError> {
        let document = self
            .repository
            .fetch_document(dataset_id)
            .await
            .map_err(|source| AnalysisError::Retrieval {
                dataset_id: dataset_id.to_string(),
                source,
            })?;

        Ok(TelemetryModel::from_document(&document)?)
    }
}
