use super::index::RankedIndex;
use super::resolver;
use super::types::RankingResponse;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RankingParams {
    pub range: String,
}

pub async fn handle_word_ranking(
    Query(params): Query<RankingParams>,
    Extension(index): Extension<Arc<RankedIndex>>,
) -> (StatusCode, Json<RankingResponse>) {
    match resolver::resolve(&index, &params.range) {
        Ok(words) => (
            StatusCode::OK,
            Json(RankingResponse {
                range: params.range,
                count: words.len(),
                words,
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to resolve range '{}': {}", params.range, e);
            (
                StatusCode::BAD_REQUEST,
                Json(RankingResponse {
                    range: params.range,
                    count: 0,
                    words: vec![],
                }),
            )
        }
    }
}
