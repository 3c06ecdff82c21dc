//! Yarnsy API Server - 小型电商后端
//!
//! # 架构概述
//!
//! 提供商品目录、购物车与订单的 JSON HTTP API：
//!
//! - **目录引擎** (`catalog`): 过滤/搜索/排序/聚合 + 推荐抽样
//! - **存储后端** (`catalog::store`): 内存快照或嵌入式 SurrealDB，构造时选择
//! - **业务服务** (`services`): 购物车 upsert、订单历史
//! - **HTTP API** (`api`): RESTful 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! yarnsy-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 查询引擎与存储后端
//! ├── services/      # 购物车、订单
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogService, Product, QueryCriteria, QueryResult, SortKey};
pub use core::{CatalogBackend, Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_level};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() {
    // .env 缺失不是错误
    let _ = dotenv::dotenv();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
__  __
\ \/ /___ _ ____ ___   _____ __  __
 \  / __ `/ ___/ __ \ / ___/ / / /
 / / /_/ / /  / / / /(__  ) /_/ /
/_/\__,_/_/  /_/ /_//____/\__, /
                         /____/
    "#
    );
}
