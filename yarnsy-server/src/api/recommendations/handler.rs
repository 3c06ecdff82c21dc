//! Recommendation API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::catalog::{Product, RECOMMEND_COUNT};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub count: Option<usize>,
}

/// GET /api/recommendations - 随机推荐 (popular 或 new 的商品池)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<Vec<Product>>> {
    let count = params.count.unwrap_or(RECOMMEND_COUNT);
    let recommendations = state
        .catalog
        .recommend(count)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(recommendations))
}
