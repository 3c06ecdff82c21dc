//! Catalog Store
//!
//! Storage abstraction behind the query engine. Two implementations exist
//! with identical semantics, selected at construction time:
//!
//! - [`MemoryCatalog`] - immutable in-process snapshot, scan-based
//! - [`SurrealCatalog`] - embedded SurrealDB, delegated queries
//!
//! The engine never mutates stored records; every operation is a read
//! against the snapshot the store was built from.

pub mod memory;
pub mod surreal;

pub use memory::MemoryCatalog;
pub use surreal::SurrealCatalog;

use async_trait::async_trait;
use thiserror::Error;

use super::criteria::QueryCriteria;
use super::model::Product;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to the product catalog
///
/// `fetch` returns the filtered and sorted subset for one set of criteria;
/// the aggregate methods always run over the full catalog regardless of any
/// filter. A scan and a delegated database query are equivalently correct.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Filtered and sorted products for the given criteria
    async fn fetch(&self, criteria: &QueryCriteria) -> StoreResult<Vec<Product>>;

    /// Single product by identifier
    async fn get(&self, id: i64) -> StoreResult<Option<Product>>;

    /// Products sharing `category`, excluding `exclude_id`, in store order,
    /// truncated to `limit`
    async fn related(
        &self,
        category: &str,
        exclude_id: i64,
        limit: usize,
    ) -> StoreResult<Vec<Product>>;

    /// Recommendation candidate pool: products flagged popular or new
    async fn flagged(&self) -> StoreResult<Vec<Product>>;

    /// Full catalog snapshot in store order
    async fn all(&self) -> StoreResult<Vec<Product>>;

    /// Distinct category values across the whole catalog
    async fn distinct_categories(&self) -> StoreResult<Vec<String>>;

    /// Distinct color values across the whole catalog (may include empty)
    async fn distinct_colors(&self) -> StoreResult<Vec<String>>;

    /// Global `(min, max)` price, `None` for an empty catalog
    async fn price_bounds(&self) -> StoreResult<Option<(f64, f64)>>;
}
