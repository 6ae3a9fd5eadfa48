use async_trait::async_trait;
use grocery_store_db::repository::exist_by_id::ExistById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn exist_by_id_impl(
        repo: &CustomerRepositoryImpl,
        id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM customer WHERE id = $1)"#)
                .bind(id)
                .fetch_one(&*repo.pool)
                .await?;
        Ok(exists)
    }
}

#[async_trait]
impl ExistById for CustomerRepositoryImpl {
    async fn exist_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::exist_by_id_impl(self, id).await
    }
}
