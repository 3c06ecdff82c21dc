//! Query Criteria
//!
//! User-supplied filter/sort parameters for one catalog query. The route
//! layer parses the query string into this type; the engine assumes the
//! criteria are already well-typed.

/// Sort key for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending lexicographic by name (default)
    #[default]
    Name,
    /// Ascending numeric by price
    Price,
    /// Descending by identifier (higher identifier = newer)
    Newest,
}

impl SortKey {
    /// Parse a sort key from its wire value
    ///
    /// Unrecognized values fall back to [`SortKey::Name`].
    pub fn parse(value: &str) -> Self {
        match value {
            "price" => SortKey::Price,
            "newest" => SortKey::Newest,
            _ => SortKey::Name,
        }
    }
}

/// Filter/sort criteria for one catalog query
#[derive(Debug, Clone)]
pub struct QueryCriteria {
    /// Exact category match, case-sensitive as stored
    pub category: Option<String>,
    /// Case-insensitive color match
    pub color: Option<String>,
    /// Free-text term matched against name, description and category
    pub search: Option<String>,
    /// Inclusive lower price bound
    pub min_price: f64,
    /// Inclusive upper price bound
    pub max_price: f64,
    pub sort: SortKey,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            category: None,
            color: None,
            search: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
            sort: SortKey::Name,
        }
    }
}

impl QueryCriteria {
    /// Search term lowered for matching, `None` when absent or empty
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
    }
}
