use async_trait::async_trait;
use grocery_store_db::models::customer::CustomerModel;
use grocery_store_db::models::identifiable::Identifiable;
use grocery_store_db::repository::create::Create;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &CustomerRepositoryImpl,
        item: CustomerModel,
    ) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        if !item.has_assigned_id() {
            return Err("Customer id must be assigned before insert".into());
        }

        let saved = sqlx::query_as::<_, CustomerModel>(
            r#"
            INSERT INTO customer (id, name, age, address, email, phone, created_date, updated_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, age, address, email, phone, created_date, updated_date
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.age)
        .bind(item.address.as_deref())
        .bind(item.email.as_deref())
        .bind(item.phone.as_deref())
        .bind(item.created_date)
        .bind(item.updated_date)
        .fetch_one(&*repo.pool)
        .await?;

        tracing::debug!(customer_id = %saved.id, "customer row inserted");
        Ok(saved)
    }
}

#[async_trait]
impl Create<CustomerModel> for CustomerRepositoryImpl {
    async fn create(&self, item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
