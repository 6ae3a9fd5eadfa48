use async_trait::async_trait;
use grocery_store_db::models::customer::CustomerModel;
use grocery_store_db::repository::update::Update;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &CustomerRepositoryImpl,
        item: CustomerModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        // created_date is deliberately absent from the SET list
        let result = sqlx::query(
            r#"
            UPDATE customer
            SET name = $2, age = $3, address = $4, email = $5, phone = $6, updated_date = $7
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.age)
        .bind(item.address.as_deref())
        .bind(item.email.as_deref())
        .bind(item.phone.as_deref())
        .bind(item.updated_date)
        .execute(&*repo.pool)
        .await?;

        tracing::debug!(
            customer_id = %item.id,
            rows_affected = result.rows_affected(),
            "customer row updated"
        );
        Ok(())
    }
}

#[async_trait]
impl Update<CustomerModel> for CustomerRepositoryImpl {
    async fn update(&self, item: CustomerModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
