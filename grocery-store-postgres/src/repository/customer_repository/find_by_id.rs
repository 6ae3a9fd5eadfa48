use async_trait::async_trait;
use grocery_store_db::models::customer::CustomerModel;
use grocery_store_db::repository::find_by_id::FindById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &CustomerRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        let customer = sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT id, name, age, address, email, phone, created_date, updated_date
            FROM customer
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*repo.pool)
        .await?;

        Ok(customer)
    }
}

#[async_trait]
impl FindById<CustomerModel> for CustomerRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use grocery_store_db::repository::create::Create;
    use grocery_store_db::repository::delete_by_id::DeleteById;
    use grocery_store_db::repository::find_by_id::FindById;
    use serial_test::serial;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::create_test_customer;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.customer_repository();

        let saved = customer_repo.create(create_test_customer("Findable")).await?;

        let loaded = customer_repo.find_by_id(saved.id).await?;
        assert_eq!(loaded, Some(saved.clone()));

        customer_repo.delete_by_id(saved.id).await?;
        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_id_missing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let customer_repo = ctx.customer_repository();

        assert_eq!(customer_repo.find_by_id(Uuid::new_v4()).await?, None);
        Ok(())
    }
}
