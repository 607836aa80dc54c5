//! Product 持久化网关
//!
//! `products` 表的读写。`ProductRepository` 有两个实现：
//! - `PgProductRepository`：基于 SQLx 的 PostgreSQL 实现
//! - `MemoryProductRepository`：内存实现，用于测试和无数据库的本地运行

use std::collections::BTreeMap;

use async_trait::async_trait;
use futures::{
    stream::{self, BoxStream},
    FutureExt, StreamExt, TryStreamExt,
};
use sqlx::postgres::PgPool;
use tokio::sync::Mutex;

use super::model::Product;
use crate::core::error::CoreError;

/// 持久化错误
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("row with id {0} does not exist")]
    RowMissing(i64),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        CoreError::InternalServerError(err.to_string())
    }
}

/// 商品持久化接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 惰性读取全部记录，每次调用都是一次新的查询
    fn find_all(&self) -> BoxStream<'_, RepositoryResult<Product>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    /// `id` 为空时插入并分配新 id，否则覆盖同 id 的已有行
    async fn save(&self, product: Product) -> RepositoryResult<Product>;

    /// 不存在时不报错
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;

    /// 连通性检查
    async fn ping(&self) -> RepositoryResult<()>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    fn find_all(&self) -> BoxStream<'_, RepositoryResult<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, category, cost, price FROM products ORDER BY id",
        )
        .fetch(&self.pool)
        .map_err(RepositoryError::from)
        .boxed()
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, category, cost, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save(&self, product: Product) -> RepositoryResult<Product> {
        match product.id {
            None => {
                let created = sqlx::query_as::<_, Product>(
                    r#"
                    INSERT INTO products (name, category, cost, price)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, category, cost, price
                    "#,
                )
                .bind(&product.name)
                .bind(&product.category)
                .bind(&product.cost)
                .bind(&product.price)
                .fetch_one(&self.pool)
                .await?;

                Ok(created)
            }
            Some(id) => sqlx::query_as::<_, Product>(
                r#"
                UPDATE products
                SET name = $2, category = $3, cost = $4, price = $5
                WHERE id = $1
                RETURNING id, name, category, cost, price
                "#,
            )
            .bind(id)
            .bind(&product.name)
            .bind(&product.category)
            .bind(&product.cost)
            .bind(&product.price)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::RowMissing(id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryStore {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// 内存实现，按 id 升序返回，id 从 1 开始递增
#[derive(Default)]
pub struct MemoryProductRepository {
    store: Mutex<MemoryStore>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    fn find_all(&self) -> BoxStream<'_, RepositoryResult<Product>> {
        async move {
            let rows: Vec<RepositoryResult<Product>> =
                self.store.lock().await.rows.values().cloned().map(Ok).collect();
            stream::iter(rows)
        }
        .flatten_stream()
        .boxed()
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        Ok(self.store.lock().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> RepositoryResult<Product> {
        let mut store = self.store.lock().await;
        let id = match product.id {
            Some(id) if store.rows.contains_key(&id) => id,
            Some(id) => return Err(RepositoryError::RowMissing(id)),
            None => {
                store.last_id += 1;
                store.last_id
            }
        };

        product.id = Some(id);
        store.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.store.lock().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
