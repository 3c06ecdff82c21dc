//! 服务器配置
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | HTTP_PORT | 5000 | HTTP 服务端口 |
//! | CATALOG_BACKEND | memory | 目录后端: memory \| database |
//! | CATALOG_SEED | data/products.json | 种子数据文件 |
//! | CATALOG_LIMIT | 100 | 启动时加载的最大记录数 |
//! | DATA_DIR | ./data | 数据目录 (数据库文件) |
//! | ENVIRONMENT | development | 运行环境 |
//!
//! # 示例
//!
//! ```ignore
//! CATALOG_BACKEND=database HTTP_PORT=8080 cargo run
//! ```

use std::path::PathBuf;

/// Catalog storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogBackend {
    /// In-memory snapshot loaded from the seed file
    #[default]
    Memory,
    /// Embedded document database
    Database,
}

impl CatalogBackend {
    /// Parse the backend name; anything unrecognized selects the in-memory
    /// backend
    pub fn parse(value: &str) -> Self {
        match value {
            "database" | "surreal" => CatalogBackend::Database,
            _ => CatalogBackend::Memory,
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 目录存储后端
    pub catalog_backend: CatalogBackend,
    /// 种子数据文件路径
    pub seed_path: String,
    /// 启动时加载的最大记录数
    pub catalog_limit: usize,
    /// 数据目录 (嵌入式数据库文件)
    pub data_dir: String,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            catalog_backend: std::env::var("CATALOG_BACKEND")
                .map(|v| CatalogBackend::parse(&v))
                .unwrap_or_default(),
            seed_path: std::env::var("CATALOG_SEED")
                .unwrap_or_else(|_| "data/products.json".into()),
            catalog_limit: std::env::var("CATALOG_LIMIT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(100),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 种子文件路径
    pub fn seed_path(&self) -> PathBuf {
        PathBuf::from(&self.seed_path)
    }

    /// 嵌入式数据库目录
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("yarnsy.db")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
