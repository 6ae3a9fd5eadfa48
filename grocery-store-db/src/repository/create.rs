use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a single entity
///
/// The entity arrives with its identity already assigned; implementations
/// reject a nil identifier rather than inventing one.
/// Returns the saved item with any storage-generated fields populated.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<CustomerModel> for PgCustomerRepository {
///     async fn create(&self, item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<T: Identifiable + Send + 'static>: Send + Sync {
    /// Insert one item
    ///
    /// # Arguments
    /// * `item` - The entity to insert
    ///
    /// # Returns
    /// * `Ok(T)` - The inserted entity as stored
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
