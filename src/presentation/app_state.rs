// Application state for HTTP handlers
use crate::application::analysis_service::AnalysisService;
use crate::application::catalog_service::DatasetCatalog;

pub struct AppState {
    pub analysis_service: AnalysisService,
    pub catalog: DatasetCatalog,
}
