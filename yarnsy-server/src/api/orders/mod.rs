//! Order API 模块
//!
//! 订单历史与物流查询 (/api/orders, /api/shipping)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::list))
        .route("/api/orders/{id}", get(handler::get_by_id))
        .route("/api/shipping", get(handler::shipping))
}
