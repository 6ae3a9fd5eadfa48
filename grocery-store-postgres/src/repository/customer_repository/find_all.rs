use async_trait::async_trait;
use grocery_store_db::models::customer::CustomerModel;
use grocery_store_db::repository::find_all::FindAll;
use std::error::Error;

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn find_all_impl(
        repo: &CustomerRepositoryImpl,
    ) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        // insertion_order stands in for storage order
        let customers = sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT id, name, age, address, email, phone, created_date, updated_date
            FROM customer
            ORDER BY insertion_order
            "#,
        )
        .fetch_all(&*repo.pool)
        .await?;

        Ok(customers)
    }
}

#[async_trait]
impl FindAll<CustomerModel> for CustomerRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Self::find_all_impl(self).await
    }
}
