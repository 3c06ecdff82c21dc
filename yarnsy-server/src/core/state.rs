//! 服务器状态
//!
//! ServerState 持有所有服务的共享引用，使用 Arc 实现浅拷贝。
//! 目录后端在初始化时按配置选择，路由层只看到 [`CatalogService`]。

use std::sync::Arc;

use crate::catalog::{CatalogService, MemoryCatalog, SurrealCatalog};
use crate::core::config::{CatalogBackend, Config};
use crate::services::{CartService, OrderService};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的单例引用
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | catalog | 目录查询服务 |
/// | carts | 购物车服务 |
/// | orders | 订单服务 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: CatalogService,
    pub carts: CartService,
    pub orders: OrderService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 测试场景使用：注入 fixture 目录。通常使用 [`Self::initialize`]。
    pub fn new(
        config: Config,
        catalog: CatalogService,
        carts: CartService,
        orders: OrderService,
    ) -> Self {
        Self {
            config,
            catalog,
            carts,
            orders,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按配置选择目录后端：
    /// - `memory`: 从种子文件加载只读快照
    /// - `database`: 打开嵌入式数据库 (空表时从种子文件导入)
    ///
    /// 存储初始化失败是致命错误，直接向上传播。
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let catalog = match config.catalog_backend {
            CatalogBackend::Memory => {
                let store = MemoryCatalog::load(&config.seed_path(), config.catalog_limit)?;
                tracing::info!(count = store.len(), "Catalog backend: in-memory snapshot");
                CatalogService::new(Arc::new(store))
            }
            CatalogBackend::Database => {
                let store = SurrealCatalog::connect(
                    &config.database_path(),
                    &config.seed_path(),
                    config.catalog_limit,
                )
                .await?;
                tracing::info!("Catalog backend: embedded database");
                CatalogService::new(Arc::new(store))
            }
        };

        Ok(Self::new(
            config.clone(),
            catalog,
            CartService::new(),
            OrderService::with_sample_data(),
        ))
    }
}
