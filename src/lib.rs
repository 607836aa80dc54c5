//! # Product API
//!
//! 基于 Axum + SQLx 的商品 CRUD 服务，分层结构：
//! - `app`：路由、处理器、业务服务、持久化网关
//! - `core`：错误处理与中间件
//! - `infrastructure`：数据库连接池与日志
//! - `config`：配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::create_app;
pub use app::product::handler::AppState;
