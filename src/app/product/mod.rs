//! 商品管理

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use model::Product;
pub use repository::{
    MemoryProductRepository, PgProductRepository, ProductRepository, RepositoryError,
};
pub use service::ProductService;
