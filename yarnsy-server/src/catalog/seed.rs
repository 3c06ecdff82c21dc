//! Catalog Seed Loading
//!
//! 目录种子数据从 JSON 文件一次性加载 (进程启动时)，
//! 只取前 N 条记录，超出部分忽略。

use std::path::Path;

use super::model::{NATURAL_COLOR, Product};
use super::store::{StoreError, StoreResult};

/// Load the product seed file, keeping only the first `limit` records
///
/// Colors are normalized on the way in: an empty color becomes the
/// `"Natural"` sentinel. Duplicate identifiers are rejected since the whole
/// engine assumes identifier uniqueness.
pub fn load_seed(path: &Path, limit: usize) -> StoreResult<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Seed(format!("cannot read {}: {}", path.display(), e)))?;

    let mut products: Vec<Product> = serde_json::from_str(&raw)
        .map_err(|e| StoreError::Seed(format!("invalid seed JSON in {}: {}", path.display(), e)))?;

    if products.len() > limit {
        tracing::warn!(
            total = products.len(),
            limit,
            "Seed file larger than catalog limit, truncating"
        );
        products.truncate(limit);
    }

    for product in &mut products {
        normalize(product);
    }

    check_unique_ids(&products)?;

    tracing::info!(count = products.len(), path = %path.display(), "Catalog seed loaded");
    Ok(products)
}

/// Normalize one record in place
pub fn normalize(product: &mut Product) {
    if product.color.trim().is_empty() {
        product.color = NATURAL_COLOR.to_string();
    }
    if product.images.is_empty() && !product.image.is_empty() {
        product.images = vec![product.image.clone()];
    }
}

fn check_unique_ids(products: &[Product]) -> StoreResult<()> {
    let mut seen = std::collections::HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(StoreError::Seed(format!(
                "duplicate product id {} in seed data",
                product.id
            )));
        }
    }
    Ok(())
}
