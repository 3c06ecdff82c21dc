//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::catalog::{
    Product, ProductDetails, QueryCriteria, QueryResult, RELATED_LIMIT, SortKey,
};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Query-string parameters for GET /api/products
///
/// Missing bounds fall back to the open range; an unrecognized sort value
/// behaves like the default name sort. Non-numeric price bounds are rejected
/// by the extractor before the engine runs.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
    pub color: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl From<ProductListParams> for QueryCriteria {
    fn from(params: ProductListParams) -> Self {
        QueryCriteria {
            category: params.category,
            color: params.color,
            search: params.search,
            min_price: params.min_price.unwrap_or(0.0),
            max_price: params.max_price.unwrap_or(f64::INFINITY),
            sort: params.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
        }
    }
}

/// GET /api/products - 查询商品 (过滤/搜索/排序 + 全目录聚合)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<QueryResult>> {
    let criteria = QueryCriteria::from(params);
    let result = state
        .catalog
        .query(&criteria)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(result))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .get_by_id(id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(product))
}

/// GET /api/products/:id/details - 商品详情 (含同类推荐)
pub async fn get_details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductDetails>> {
    let details = state
        .catalog
        .get_details(id, RELATED_LIMIT)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(details))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let criteria = QueryCriteria::from(ProductListParams::default());
        assert_eq!(criteria.min_price, 0.0);
        assert_eq!(criteria.max_price, f64::INFINITY);
        assert_eq!(criteria.sort, SortKey::Name);
        assert!(criteria.category.is_none());
    }

    #[test]
    fn test_params_unrecognized_sort_falls_back() {
        let params = ProductListParams {
            sort: Some("popularity".to_string()),
            ..Default::default()
        };
        assert_eq!(QueryCriteria::from(params).sort, SortKey::Name);
    }

    #[test]
    fn test_params_carry_filters() {
        let params = ProductListParams {
            category: Some("tops".to_string()),
            color: Some("Lavender".to_string()),
            search: Some("dream".to_string()),
            sort: Some("price".to_string()),
            min_price: Some(10.0),
            max_price: Some(90.0),
        };
        let criteria = QueryCriteria::from(params);
        assert_eq!(criteria.category.as_deref(), Some("tops"));
        assert_eq!(criteria.sort, SortKey::Price);
        assert_eq!(criteria.max_price, 90.0);
    }
}
