use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for checking existence of an entity by its ID
///
/// # Example
/// ```ignore
/// impl ExistById for PgCustomerRepository {
///     async fn exist_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ExistById: Send + Sync {
    /// Check existence of an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID to check
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether an entity with this id is stored
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_id(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
