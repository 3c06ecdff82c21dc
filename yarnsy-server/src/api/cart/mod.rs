//! Cart API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/cart",
        get(handler::get_cart)
            .post(handler::add_item)
            .delete(handler::remove_item),
    )
}
