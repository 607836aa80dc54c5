//! Product 业务服务

use std::sync::Arc;

use futures::stream::BoxStream;
use tracing::{debug, info};

use super::model::Product;
use super::repository::{ProductRepository, RepositoryResult};

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn get_all_products(&self) -> BoxStream<'_, RepositoryResult<Product>> {
        self.repository.find_all()
    }

    pub async fn get_product_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let product = self.repository.find_by_id(id).await?;
        if product.is_none() {
            debug!("Product {} not found", id);
        }
        Ok(product)
    }

    pub async fn create_product(&self, product: Product) -> RepositoryResult<Product> {
        let created = self.repository.save(product).await?;
        info!("Created product: {} ({:?})", created.name, created.id);
        Ok(created)
    }

    /// 按路径 id 更新商品
    ///
    /// 记录不存在时返回 `None` 且不写入。存在时只把查到的 id 写回请求体，
    /// 请求体中自带的 id 一律被覆盖，其余字段整体替换。
    pub async fn update_product(
        &self,
        id: i64,
        mut updated: Product,
    ) -> RepositoryResult<Option<Product>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            debug!("Product {} not found, skipping update", id);
            return Ok(None);
        };

        updated.id = existing.id;
        let saved = self.repository.save(updated).await?;
        info!("Updated product: {} ({:?})", saved.name, saved.id);
        Ok(Some(saved))
    }

    pub async fn delete_product(&self, id: i64) -> RepositoryResult<()> {
        self.repository.delete_by_id(id).await?;
        info!("Deleted product: {}", id);
        Ok(())
    }

    pub async fn check_health(&self) -> RepositoryResult<()> {
        self.repository.ping().await
    }
}
