//! Cart API Handlers
//!
//! 购物车操作按用户键控；未提供 user_id 时归入 guest 用户。

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::services::{Cart, GUEST_USER};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct CartQuery {
    pub user_id: Option<String>,
}

/// Payload for POST /api/cart
#[derive(Debug, Deserialize)]
pub struct CartAdd {
    pub user_id: Option<String>,
    pub product_id: i64,
    pub quantity: Option<u32>,
}

/// Payload for DELETE /api/cart
#[derive(Debug, Deserialize)]
pub struct CartRemove {
    pub user_id: Option<String>,
    pub product_id: i64,
}

/// Response for cart mutations
#[derive(Debug, Serialize)]
pub struct CartMutationResponse {
    pub success: bool,
    pub message: String,
    pub cart: Cart,
}

fn user_or_guest(user_id: Option<String>) -> String {
    user_id.unwrap_or_else(|| GUEST_USER.to_string())
}

/// GET /api/cart - 获取购物车
pub async fn get_cart(
    State(state): State<ServerState>,
    Query(params): Query<CartQuery>,
) -> Json<Cart> {
    let user = user_or_guest(params.user_id);
    Json(state.carts.get(&user))
}

/// POST /api/cart - 添加商品
///
/// 校验商品存在后再写入，数量默认为 1。
pub async fn add_item(
    State(state): State<ServerState>,
    Json(payload): Json<CartAdd>,
) -> AppResult<Json<CartMutationResponse>> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::validation("quantity must be at least 1"));
    }

    let product = state
        .catalog
        .get_by_id(payload.product_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::not_found(format!("Product {} not found", payload.product_id))
        })?;

    let user = user_or_guest(payload.user_id);
    let cart = state.carts.add_item(&user, &product, quantity);

    Ok(Json(CartMutationResponse {
        success: true,
        message: "Item added to cart".to_string(),
        cart,
    }))
}

/// DELETE /api/cart - 移除商品
pub async fn remove_item(
    State(state): State<ServerState>,
    Json(payload): Json<CartRemove>,
) -> AppResult<Json<CartMutationResponse>> {
    let user = user_or_guest(payload.user_id);
    let cart = state.carts.remove_item(&user, payload.product_id);

    Ok(Json(CartMutationResponse {
        success: true,
        message: "Item removed from cart".to_string(),
        cart,
    }))
}
