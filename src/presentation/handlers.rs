// HTTP request handlers
use crate::application::analysis_service::AnalysisError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List available dataset identifiers (cached after first use)
pub async fn list_datasets(State(state): State<Arc<AppState>>) -> Response {
    match state.catalog.list().await {
        Ok(ids) => Json(ids).into_response(),
        Err(e) => {
            tracing::error!("failed to list datasets: {e:#}");
            retrieval_error("could not retrieve the dataset list")
        }
    }
}

/// Explicitly refresh the dataset catalog and return the new list
pub async fn refresh_datasets(State(state): State<Arc<AppState>>) -> Response {
    match state.catalog.refresh().await {
        Ok(ids) => Json(ids).into_response(),
        Err(e) => {
            tracing::error!("failed to refresh datasets: {e:#}");
            retrieval_error("could not refresh the dataset list")
        }
    }
}

/// Full chart bundle for one dataset
pub async fn dataset_charts(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.analysis_service.get_charts(&id).await {
        Ok(bundle) => Json(bundle).into_response(),
        Err(e) => analysis_error(e),
    }
}

/// Workbook descriptor for one dataset
pub async fn dataset_export(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.analysis_service.get_workbook(&id).await {
        Ok(workbook) => Json(workbook).into_response(),
        Err(e) => analysis_error(e),
    }
}

fn analysis_error(error: AnalysisError) -> Response {
    let status = match &error {
        AnalysisError::Retrieval { .. } => StatusCode::BAD_GATEWAY,
        AnalysisError::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    tracing::error!("analysis request failed: {error:?}");

    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn retrieval_error(message: &str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
