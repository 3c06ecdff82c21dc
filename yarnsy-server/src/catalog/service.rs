//! Catalog Service
//!
//! 目录查询服务 - 组合存储后端与查询/聚合/推荐逻辑。
//! 路由层只与本服务交互，不感知存储实现。

use std::sync::Arc;

use super::criteria::QueryCriteria;
use super::model::{FilterMetadata, PriceRange, Product, ProductDetails, QueryResult};
use super::recommend::sample_products;
use super::store::{CatalogStore, StoreResult};

/// Default number of related records returned with a product detail view
pub const RELATED_LIMIT: usize = 4;

/// Default number of sampled recommendations
pub const RECOMMEND_COUNT: usize = 4;

/// Storage-agnostic catalog query service
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Run one catalog query: filtered + sorted matches plus catalog-wide
    /// metadata
    ///
    /// Metadata is always computed over the unfiltered catalog; criteria
    /// matching nothing yield an empty result with `total == 0`, never an
    /// error.
    pub async fn query(&self, criteria: &QueryCriteria) -> StoreResult<QueryResult> {
        let products = self.store.fetch(criteria).await?;
        let filters = self.metadata().await?;

        Ok(QueryResult {
            total: products.len(),
            products,
            filters,
        })
    }

    /// Catalog-wide aggregates, independent of any active filter
    async fn metadata(&self) -> StoreResult<FilterMetadata> {
        let mut categories = self.store.distinct_categories().await?;
        categories.sort();

        let mut colors: Vec<String> = self
            .store
            .distinct_colors()
            .await?
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();
        colors.sort();

        let price_range = self
            .store
            .price_bounds()
            .await?
            .map(|(min, max)| PriceRange { min, max })
            .unwrap_or_else(PriceRange::empty);

        Ok(FilterMetadata {
            categories,
            colors,
            price_range,
        })
    }

    /// Single product lookup
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        self.store.get(id).await
    }

    /// Product plus up to `limit` records sharing its category (the target
    /// itself excluded), in store order
    pub async fn get_details(&self, id: i64, limit: usize) -> StoreResult<Option<ProductDetails>> {
        let Some(product) = self.store.get(id).await? else {
            return Ok(None);
        };

        let related = self.store.related(&product.category, id, limit).await?;
        Ok(Some(ProductDetails { product, related }))
    }

    /// Sample `count` recommendations from the flagged candidate pool
    /// (popular or new), falling back to the whole catalog when no record is
    /// flagged
    pub async fn recommend(&self, count: usize) -> StoreResult<Vec<Product>> {
        let pool = self.store.flagged().await?;
        let pool = if pool.is_empty() {
            self.store.all().await?
        } else {
            pool
        };
        Ok(sample_products(&pool, count))
    }
}
