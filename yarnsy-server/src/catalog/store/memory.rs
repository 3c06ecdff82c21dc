//! In-Memory Catalog Store
//!
//! Scan-based store over an immutable snapshot loaded once at startup.
//! Also the fixture store for tests, which construct it from a plain vector.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::criteria::QueryCriteria;
use crate::catalog::engine::{filter_products, sort_products};
use crate::catalog::model::Product;
use crate::catalog::seed;

use super::{CatalogStore, StoreResult};

/// Immutable in-process catalog snapshot
#[derive(Clone)]
pub struct MemoryCatalog {
    products: Arc<Vec<Product>>,
}

impl MemoryCatalog {
    /// Build a catalog directly from records (fixture catalogs in tests)
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// Load the catalog from a JSON seed file, first `limit` records only
    pub fn load(path: &Path, limit: usize) -> StoreResult<Self> {
        let products = seed::load_seed(path, limit)?;
        Ok(Self::from_products(products))
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn fetch(&self, criteria: &QueryCriteria) -> StoreResult<Vec<Product>> {
        let mut matches = filter_products(&self.products, criteria);
        sort_products(&mut matches, criteria.sort);
        Ok(matches)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn related(
        &self,
        category: &str,
        exclude_id: i64,
        limit: usize,
    ) -> StoreResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category && p.id != exclude_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn flagged(&self) -> StoreResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.is_flagged())
            .cloned()
            .collect())
    }

    async fn all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.as_ref().clone())
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        let mut categories: Vec<String> = self.products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn distinct_colors(&self) -> StoreResult<Vec<String>> {
        let mut colors: Vec<String> = self.products.iter().map(|p| p.color.clone()).collect();
        colors.sort();
        colors.dedup();
        Ok(colors)
    }

    async fn price_bounds(&self) -> StoreResult<Option<(f64, f64)>> {
        Ok(self
            .products
            .iter()
            .map(|p| p.price)
            .fold(None, |acc, price| match acc {
                Some((min, max)) => Some((f64::min(min, price), f64::max(max, price))),
                None => Some((price, price)),
            }))
    }
}
