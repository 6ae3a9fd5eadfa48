use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for hard-deleting an entity by its ID
///
/// Deleting an absent entity is not an error.
#[async_trait]
pub trait DeleteById: Send + Sync {
    /// # Arguments
    /// * `id` - The UUID of the entity to delete
    ///
    /// # Returns
    /// * `Ok(())` - The statement was executed
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_id(&self, id: Uuid) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
