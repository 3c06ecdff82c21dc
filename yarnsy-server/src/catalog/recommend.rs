//! Recommendation Sampling
//!
//! Uniform sampling without replacement from a candidate pool. Each call is
//! independent; there is no seed persistence or ordering guarantee.

use rand::seq::SliceRandom;

use super::model::Product;

/// Draw `min(count, pool.len())` products uniformly at random without
/// replacement
pub fn sample_products(pool: &[Product], count: usize) -> Vec<Product> {
    let mut rng = rand::thread_rng();
    pool.choose_multiple(&mut rng, count.min(pool.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_product(id: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: 10.0,
            category: "tops".to_string(),
            color: "Natural".to_string(),
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            popular: false,
            is_new: false,
            sale: false,
            in_stock: true,
            stock_quantity: 10,
        }
    }

    #[test]
    fn test_sample_bounded_by_pool_size() {
        let pool: Vec<Product> = (1..=2).map(make_product).collect();
        let sample = sample_products(&pool, 4);
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn test_sample_bounded_by_count() {
        let pool: Vec<Product> = (1..=10).map(make_product).collect();
        let sample = sample_products(&pool, 4);
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let pool: Vec<Product> = (1..=10).map(make_product).collect();
        for _ in 0..50 {
            let sample = sample_products(&pool, 4);
            let ids: HashSet<i64> = sample.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), sample.len());
        }
    }

    #[test]
    fn test_sample_from_empty_pool() {
        assert!(sample_products(&[], 4).is_empty());
    }
}
