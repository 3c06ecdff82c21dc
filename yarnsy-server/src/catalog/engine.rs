//! Catalog Query Engine
//!
//! Pure filter/sort/aggregate pipeline over a product snapshot. The
//! in-memory store applies these functions directly; the database store
//! delegates the same semantics to the storage engine.

use std::collections::BTreeSet;

use super::criteria::{QueryCriteria, SortKey};
use super::model::{FilterMetadata, PriceRange, Product};

/// Check the exact category filter (case-sensitive as stored)
pub fn matches_category(product: &Product, criteria: &QueryCriteria) -> bool {
    match &criteria.category {
        Some(category) => product.category == *category,
        None => true,
    }
}

/// Check the case-insensitive color filter
pub fn matches_color(product: &Product, criteria: &QueryCriteria) -> bool {
    match &criteria.color {
        Some(color) => product.color.eq_ignore_ascii_case(color),
        None => true,
    }
}

/// Check the free-text search filter
///
/// The lowercased term must be a substring of the lowercased name,
/// description or category. An absent or empty term passes everything.
pub fn matches_search(product: &Product, term: Option<&str>) -> bool {
    match term {
        Some(term) => {
            product.name.to_lowercase().contains(term)
                || product.description.to_lowercase().contains(term)
                || product.category.to_lowercase().contains(term)
        }
        None => true,
    }
}

/// Check the inclusive price range filter
pub fn in_price_range(product: &Product, criteria: &QueryCriteria) -> bool {
    product.price >= criteria.min_price && product.price <= criteria.max_price
}

/// Apply all filter stages in order: category, color, search, price
///
/// A `max_price` below `min_price` simply yields an empty set.
pub fn filter_products(products: &[Product], criteria: &QueryCriteria) -> Vec<Product> {
    let term = criteria.search_term();
    products
        .iter()
        .filter(|p| matches_category(p, criteria))
        .filter(|p| matches_color(p, criteria))
        .filter(|p| matches_search(p, term.as_deref()))
        .filter(|p| in_price_range(p, criteria))
        .cloned()
        .collect()
}

/// Sort filtered products in place (stable)
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

/// Compute catalog-wide aggregates
///
/// Always runs over the full, unfiltered catalog: distinct categories,
/// distinct non-empty colors, and the global price bounds. An empty catalog
/// yields `{0, 0}` bounds.
pub fn compute_metadata(products: &[Product]) -> FilterMetadata {
    let categories: BTreeSet<String> = products.iter().map(|p| p.category.clone()).collect();
    let colors: BTreeSet<String> = products
        .iter()
        .filter(|p| !p.color.is_empty())
        .map(|p| p.color.clone())
        .collect();

    let price_range = products
        .iter()
        .map(|p| p.price)
        .fold(None::<PriceRange>, |acc, price| {
            Some(match acc {
                Some(range) => PriceRange {
                    min: range.min.min(price),
                    max: range.max.max(price),
                },
                None => PriceRange {
                    min: price,
                    max: price,
                },
            })
        })
        .unwrap_or_else(PriceRange::empty);

    FilterMetadata {
        categories: categories.into_iter().collect(),
        colors: colors.into_iter().collect(),
        price_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, name: &str, price: f64, category: &str, color: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            color: color.to_string(),
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

    fn sample_catalog() -> Vec<Product> {
        vec![
            make_product(1, "Lavender Dream Top", 89.99, "tops", "Lavender"),
            make_product(2, "Sunset Blush Bag", 64.99, "bags", "Blush"),
            make_product(3, "Rose Garden Scarf", 45.99, "scarves", "Rose"),
            make_product(4, "Mint Fresh Top", 89.99, "tops", "Mint"),
        ]
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = sample_catalog();
        let criteria = QueryCriteria {
            category: Some("tops".to_string()),
            ..Default::default()
        };
        let results = filter_products(&catalog, &criteria);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.category == "tops"));

        // Stored categories are lowercase; a differently-cased criterion misses
        let criteria = QueryCriteria {
            category: Some("Tops".to_string()),
            ..Default::default()
        };
        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_color_filter_is_case_insensitive() {
        let catalog = sample_catalog();
        let criteria = QueryCriteria {
            color: Some("lavender".to_string()),
            ..Default::default()
        };
        let results = filter_products(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_search_matches_name_description_category() {
        let mut catalog = sample_catalog();
        catalog[1].description = "Hand-dyed lavender tones".to_string();

        let criteria = QueryCriteria {
            search: Some("LAVENDER".to_string()),
            ..Default::default()
        };
        let results = filter_products(&catalog, &criteria);
        // id 1 by name, id 2 by description
        assert_eq!(results.len(), 2);

        let criteria = QueryCriteria {
            search: Some("scarv".to_string()),
            ..Default::default()
        };
        let results = filter_products(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 3);
    }

    #[test]
    fn test_search_case_insensitive_same_set() {
        let catalog = sample_catalog();
        let upper = filter_products(
            &catalog,
            &QueryCriteria {
                search: Some("LAVENDER".to_string()),
                ..Default::default()
            },
        );
        let lower = filter_products(
            &catalog,
            &QueryCriteria {
                search: Some("lavender".to_string()),
                ..Default::default()
            },
        );
        let upper_ids: Vec<i64> = upper.iter().map(|p| p.id).collect();
        let lower_ids: Vec<i64> = lower.iter().map(|p| p.id).collect();
        assert_eq!(upper_ids, lower_ids);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = sample_catalog();
        let criteria = QueryCriteria {
            min_price: 45.99,
            max_price: 64.99,
            ..Default::default()
        };
        let results = filter_products(&catalog, &criteria);
        let ids: Vec<i64> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_inverted_price_range_yields_empty() {
        let catalog = sample_catalog();
        let criteria = QueryCriteria {
            min_price: 100.0,
            max_price: 50.0,
            ..Default::default()
        };
        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let catalog = sample_catalog();
        let criteria = QueryCriteria {
            category: Some("tops".to_string()),
            search: Some("mint".to_string()),
            max_price: 100.0,
            ..Default::default()
        };
        let results = filter_products(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 4);
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let mut products = sample_catalog();
        sort_products(&mut products, SortKey::Name);
        for pair in products.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn test_sort_by_price_non_decreasing() {
        let mut products = sample_catalog();
        sort_products(&mut products, SortKey::Price);
        for pair in products.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_sort_newest_descending_by_id() {
        let mut products = sample_catalog();
        sort_products(&mut products, SortKey::Newest);
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut products = sample_catalog();
        sort_products(&mut products, SortKey::Price);
        // ids 1 and 4 share a price; input order (1 before 4) is preserved
        let equal: Vec<i64> = products
            .iter()
            .filter(|p| p.price == 89.99)
            .map(|p| p.id)
            .collect();
        assert_eq!(equal, vec![1, 4]);
    }

    #[test]
    fn test_metadata_covers_entire_catalog() {
        let catalog = sample_catalog();
        let metadata = compute_metadata(&catalog);
        assert_eq!(metadata.categories, vec!["bags", "scarves", "tops"]);
        assert_eq!(metadata.colors, vec!["Blush", "Lavender", "Mint", "Rose"]);
        assert_eq!(metadata.price_range.min, 45.99);
        assert_eq!(metadata.price_range.max, 89.99);
    }

    #[test]
    fn test_metadata_skips_empty_colors() {
        let mut catalog = sample_catalog();
        catalog[0].color = String::new();
        let metadata = compute_metadata(&catalog);
        assert!(!metadata.colors.contains(&String::new()));
        assert_eq!(metadata.colors.len(), 3);
    }

    #[test]
    fn test_metadata_empty_catalog_zero_bounds() {
        let metadata = compute_metadata(&[]);
        assert!(metadata.categories.is_empty());
        assert!(metadata.colors.is_empty());
        assert_eq!(metadata.price_range, PriceRange::empty());
    }
}
