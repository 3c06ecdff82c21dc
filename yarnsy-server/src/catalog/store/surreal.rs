//! SurrealDB Catalog Store
//!
//! Embedded document database backend. Filtering, sorting and the aggregate
//! queries are delegated to the storage engine; the numeric product
//! identifier is carried as the record key (`product:<id>`), so every read
//! aliases it back into the wire shape with `record::id(id) AS id`.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::catalog::criteria::{QueryCriteria, SortKey};
use crate::catalog::model::Product;
use crate::catalog::seed;

use super::{CatalogStore, StoreError, StoreResult};

const PRODUCT_TABLE: &str = "product";

/// Projection shared by every product read
const PRODUCT_FIELDS: &str = "*, record::id(id) AS id";

/// Catalog store backed by an embedded SurrealDB instance
#[derive(Clone)]
pub struct SurrealCatalog {
    db: Surreal<Db>,
}

/// Stored document shape: everything except the identifier, which lives in
/// the record key
#[derive(Debug, Serialize, Deserialize)]
struct ProductRecord {
    name: String,
    price: f64,
    category: String,
    color: String,
    description: String,
    image: String,
    images: Vec<String>,
    popular: bool,
    #[serde(rename = "new")]
    is_new: bool,
    sale: bool,
    in_stock: bool,
    stock_quantity: i64,
}

impl From<&Product> for ProductRecord {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price,
            category: p.category.clone(),
            color: p.color.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            images: p.images.clone(),
            popular: p.popular,
            is_new: p.is_new,
            sale: p.sale,
            in_stock: p.in_stock,
            stock_quantity: p.stock_quantity,
        }
    }
}

impl SurrealCatalog {
    /// Open (or create) the embedded database and seed the product table
    /// from the seed file when it is empty
    pub async fn connect(db_path: &Path, seed_path: &Path, limit: usize) -> StoreResult<Self> {
        let db = Surreal::new::<RocksDb>(db_path.to_string_lossy().into_owned()).await?;
        db.use_ns("yarnsy").use_db("catalog").await?;

        let store = Self { db };
        let count = store.count().await?;
        if count == 0 {
            let products = seed::load_seed(seed_path, limit)?;
            store.seed(&products).await?;
        } else {
            tracing::info!(count, "Catalog database opened");
        }

        Ok(store)
    }

    async fn count(&self) -> StoreResult<usize> {
        #[derive(Deserialize)]
        struct CountRow {
            count: usize,
        }

        let rows: Vec<CountRow> = self
            .db
            .query("SELECT count() FROM type::table($tb) GROUP ALL")
            .bind(("tb", PRODUCT_TABLE))
            .await?
            .take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }

    async fn seed(&self, products: &[Product]) -> StoreResult<()> {
        for product in products {
            let record = ProductRecord::from(product);
            let created: Option<ProductRecord> = self
                .db
                .create((PRODUCT_TABLE, product.id))
                .content(record)
                .await?;
            if created.is_none() {
                return Err(StoreError::Database(format!(
                    "failed to seed product {}",
                    product.id
                )));
            }
        }
        tracing::info!(count = products.len(), "Catalog database seeded");
        Ok(())
    }
}

/// Assemble the WHERE/ORDER BY tail for a catalog fetch
///
/// Filter values are bound, never interpolated; only fixed clause fragments
/// are assembled here.
fn fetch_clauses(criteria: &QueryCriteria) -> String {
    let mut conditions = vec!["price >= $min_price".to_string()];
    if criteria.max_price.is_finite() {
        conditions.push("price <= $max_price".to_string());
    }
    if criteria.category.is_some() {
        conditions.push("category = $category".to_string());
    }
    if criteria.color.is_some() {
        conditions.push("string::lowercase(color) = $color".to_string());
    }
    if criteria.search_term().is_some() {
        conditions.push(
            "(string::contains(string::lowercase(name), $search) \
             OR string::contains(string::lowercase(description), $search) \
             OR string::contains(string::lowercase(category), $search))"
                .to_string(),
        );
    }

    let order = match criteria.sort {
        SortKey::Name => "ORDER BY name ASC",
        SortKey::Price => "ORDER BY price ASC",
        SortKey::Newest => "ORDER BY id DESC",
    };

    format!("WHERE {} {}", conditions.join(" AND "), order)
}

#[async_trait]
impl CatalogStore for SurrealCatalog {
    async fn fetch(&self, criteria: &QueryCriteria) -> StoreResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM {} {}",
            PRODUCT_FIELDS,
            PRODUCT_TABLE,
            fetch_clauses(criteria)
        );

        let mut query = self.db.query(sql).bind(("min_price", criteria.min_price));
        if criteria.max_price.is_finite() {
            query = query.bind(("max_price", criteria.max_price));
        }
        if let Some(category) = criteria.category.clone() {
            query = query.bind(("category", category));
        }
        if let Some(color) = &criteria.color {
            query = query.bind(("color", color.to_lowercase()));
        }
        if let Some(term) = criteria.search_term() {
            query = query.bind(("search", term));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        Ok(products)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Product>> {
        let products: Vec<Product> = self
            .db
            .query(format!(
                "SELECT {} FROM type::thing($tb, $id)",
                PRODUCT_FIELDS
            ))
            .bind(("tb", PRODUCT_TABLE))
            .bind(("id", id))
            .await?
            .take(0)?;
        Ok(products.into_iter().next())
    }

    async fn related(
        &self,
        category: &str,
        exclude_id: i64,
        limit: usize,
    ) -> StoreResult<Vec<Product>> {
        let products: Vec<Product> = self
            .db
            .query(format!(
                "SELECT {} FROM {} WHERE category = $category AND record::id(id) != $exclude LIMIT {}",
                PRODUCT_FIELDS, PRODUCT_TABLE, limit
            ))
            .bind(("category", category.to_string()))
            .bind(("exclude", exclude_id))
            .await?
            .take(0)?;
        Ok(products)
    }

    async fn flagged(&self) -> StoreResult<Vec<Product>> {
        let products: Vec<Product> = self
            .db
            .query(format!(
                "SELECT {} FROM {} WHERE popular = true OR `new` = true",
                PRODUCT_FIELDS, PRODUCT_TABLE
            ))
            .await?
            .take(0)?;
        Ok(products)
    }

    async fn all(&self) -> StoreResult<Vec<Product>> {
        let products: Vec<Product> = self
            .db
            .query(format!("SELECT {} FROM {}", PRODUCT_FIELDS, PRODUCT_TABLE))
            .await?
            .take(0)?;
        Ok(products)
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        let categories: Vec<String> = self
            .db
            .query("SELECT VALUE category FROM type::table($tb) GROUP BY category")
            .bind(("tb", PRODUCT_TABLE))
            .await?
            .take(0)?;
        Ok(categories)
    }

    async fn distinct_colors(&self) -> StoreResult<Vec<String>> {
        let colors: Vec<String> = self
            .db
            .query("SELECT VALUE color FROM type::table($tb) GROUP BY color")
            .bind(("tb", PRODUCT_TABLE))
            .await?
            .take(0)?;
        Ok(colors)
    }

    async fn price_bounds(&self) -> StoreResult<Option<(f64, f64)>> {
        #[derive(Deserialize)]
        struct BoundsRow {
            min: Option<f64>,
            max: Option<f64>,
        }

        let rows: Vec<BoundsRow> = self
            .db
            .query(
                "SELECT math::min(price) AS min, math::max(price) AS max \
                 FROM type::table($tb) GROUP ALL",
            )
            .bind(("tb", PRODUCT_TABLE))
            .await?
            .take(0)?;

        Ok(rows.into_iter().next().and_then(|r| r.min.zip(r.max)))
    }
}
