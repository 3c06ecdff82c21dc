//! Catalog Models
//!
//! 商品目录的核心数据类型。`Product` 是固定结构的记录类型，
//! 目录加载后不再修改 (只读快照)。

use serde::{Deserialize, Serialize};

/// Sentinel color assigned to records whose source data carries no color
pub const NATURAL_COLOR: &str = "Natural";

/// Product record
///
/// Identifiers are positive and unique across the whole catalog; higher
/// identifiers are newer (there is no timestamp field). Price is
/// non-negative and always comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Category, lowercase as stored
    pub category: String,
    /// Display color; empty in source data is normalized to [`NATURAL_COLOR`]
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    /// Flag for newly added items ("new" on the wire)
    #[serde(default, rename = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub sale: bool,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default = "default_stock")]
    pub stock_quantity: i64,
}

fn default_true() -> bool {
    true
}

fn default_stock() -> i64 {
    10
}

impl Product {
    /// Whether this product belongs to the recommendation candidate pool
    pub fn is_flagged(&self) -> bool {
        self.popular || self.is_new
    }
}

/// Catalog-wide price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Bounds for an empty catalog (not an error)
    pub fn empty() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::empty()
    }
}

/// Aggregate values over the entire catalog, independent of any active filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterMetadata {
    /// Sorted distinct categories
    pub categories: Vec<String>,
    /// Sorted distinct non-empty colors
    pub colors: Vec<String>,
    pub price_range: PriceRange,
}

/// Result of one catalog query: matches plus catalog-wide metadata
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub products: Vec<Product>,
    pub total: usize,
    pub filters: FilterMetadata,
}

/// Product detail view: the record plus related records from its category
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetails {
    pub product: Product,
    pub related: Vec<Product>,
}
