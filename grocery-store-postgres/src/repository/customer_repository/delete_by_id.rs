use async_trait::async_trait;
use grocery_store_db::repository::delete_by_id::DeleteById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &CustomerRepositoryImpl,
        id: Uuid,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let result = sqlx::query(r#"DELETE FROM customer WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;

        tracing::debug!(customer_id = %id, rows_affected = result.rows_affected(), "customer row deleted");
        Ok(())
    }
}

#[async_trait]
impl DeleteById for CustomerRepositoryImpl {
    async fn delete_by_id(&self, id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}
