//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::{Order, ShippingInfo};
use crate::utils::{AppError, AppResult};

/// GET /api/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.list())
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

#[derive(Debug, Deserialize)]
pub struct ShippingQuery {
    pub order_id: i64,
}

/// GET /api/shipping?order_id= - 物流信息
pub async fn shipping(
    State(state): State<ServerState>,
    Query(params): Query<ShippingQuery>,
) -> AppResult<Json<ShippingInfo>> {
    let info = state
        .orders
        .shipping(params.order_id)
        .ok_or_else(|| AppError::not_found("Shipping info not found".to_string()))?;
    Ok(Json(info))
}
