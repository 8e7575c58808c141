//! Product catalogue repository.

use async_trait::async_trait;

use crate::domain::Product;
use crate::errors::AppResult;
use crate::infra::db::DbSession;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SELECT_PRODUCT: &str =
    "SELECT ID AS id, nome AS name, categoria AS category, peso AS weight FROM Prodotto";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Product>>;

    async fn list_by_category(&self, category: &str) -> AppResult<Vec<Product>>;
}

pub struct ProductStore {
    db: DbSession,
}

impl ProductStore {
    pub fn new(db: DbSession) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        self.db
            .fetch_all(&format!("{} ORDER BY ID", SELECT_PRODUCT), vec![])
            .await
    }

    async fn list_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        self.db
            .fetch_all(
                &format!("{} WHERE categoria = ? ORDER BY ID", SELECT_PRODUCT),
                vec![category.into()],
            )
            .await
    }
}
