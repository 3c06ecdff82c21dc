//! Health API Handlers

use axum::Json;
use serde::Serialize;

/// 简单健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// 服务横幅响应
#[derive(Serialize)]
pub struct IndexResponse {
    status: &'static str,
    message: &'static str,
    endpoints: Vec<&'static str>,
}

/// GET /api/health - 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Yarnsy API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET / - 服务横幅与端点列表
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "online",
        message: "Connected to Yarnsy API",
        endpoints: vec![
            "/api/products",
            "/api/products/{id}",
            "/api/products/{id}/details",
            "/api/recommendations",
            "/api/cart",
            "/api/orders",
            "/api/shipping",
        ],
    })
}
