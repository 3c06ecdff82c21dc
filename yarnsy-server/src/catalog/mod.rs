//! 商品目录模块 - 查询引擎、存储后端与推荐
//!
//! # 模块结构
//!
//! - [`model`] - 商品与聚合结果类型
//! - [`criteria`] - 查询条件与排序键
//! - [`engine`] - 过滤/排序/聚合管线 (纯函数)
//! - [`store`] - 存储抽象 (内存快照 / 嵌入式数据库)
//! - [`seed`] - 种子数据加载
//! - [`recommend`] - 推荐抽样
//! - [`service`] - 对路由层暴露的查询服务

pub mod criteria;
pub mod engine;
pub mod model;
pub mod recommend;
pub mod seed;
pub mod service;
pub mod store;

pub use criteria::{QueryCriteria, SortKey};
pub use model::{FilterMetadata, PriceRange, Product, ProductDetails, QueryResult};
pub use service::{CatalogService, RECOMMEND_COUNT, RELATED_LIMIT};
pub use store::{CatalogStore, MemoryCatalog, StoreError, StoreResult, SurrealCatalog};
