use super::service::IngestionService;
use super::types::{IngestResponse, PostWordsRequest, StateOpResponse};
use crate::error::WordRankError;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_post_words(
    Extension(service): Extension<Arc<IngestionService>>,
    Json(req): Json<PostWordsRequest>,
) -> (StatusCode, Json<IngestResponse>) {
    match service.ingest(&req.kind, &req.data).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(IngestResponse {
                status: "indexed".to_string(),
                lines_read: stats.lines_read,
                words_indexed: stats.words_indexed,
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to ingest '{}' source: {}", req.kind, e);
            let (code, status) = ingest_failure_status(&e);
            (
                code,
                Json(IngestResponse {
                    status: status.to_string(),
                    lines_read: 0,
                    words_indexed: 0,
                }),
            )
        }
    }
}

pub async fn handle_save(
    Extension(service): Extension<Arc<IngestionService>>,
) -> (StatusCode, Json<StateOpResponse>) {
    match service.save_snapshot() {
        Ok(_) => (
            StatusCode::OK,
            Json(StateOpResponse {
                status: "saved".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to save snapshot: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StateOpResponse {
                    status: "save_failed".to_string(),
                }),
            )
        }
    }
}

pub async fn handle_reset(
    Extension(service): Extension<Arc<IngestionService>>,
) -> (StatusCode, Json<StateOpResponse>) {
    match service.reset() {
        Ok(_) => (
            StatusCode::OK,
            Json(StateOpResponse {
                status: "reset".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to reset state: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StateOpResponse {
                    status: "reset_failed".to_string(),
                }),
            )
        }
    }
}

fn ingest_failure_status(e: &WordRankError) -> (StatusCode, &'static str) {
    match e {
        WordRankError::UnrecognizedInputKind(_) => {
            (StatusCode::BAD_REQUEST, "unrecognized_input_kind")
        }
        WordRankError::Fetch(_) => (StatusCode::BAD_GATEWAY, "download_failed"),
        WordRankError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "read_failed"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "ingest_failed"),
    }
}
