use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::{CustomerForCreation, CustomerForDisplay, CustomerForUpdate};
use crate::error::ServiceResult;

/// Lifecycle operations over customers.
///
/// Every method returns a typed outcome; turning an outcome into a transport
/// status is the caller's concern.
///
/// # Example
/// ```ignore
/// let created = service.create(CustomerForCreation::named("Darryl")).await?;
/// service.delete(created.id).await?;
/// ```
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// All customers in storage order. An empty list is a success.
    async fn list(&self) -> ServiceResult<Vec<CustomerForDisplay>>;

    /// # Returns
    /// * `Ok(CustomerForDisplay)` - The stored customer
    /// * `Err(InvalidArgument)` - If `id` is the nil UUID
    /// * `Err(NotFound)` - If no customer has this id
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<CustomerForDisplay>;

    /// Validates, assigns a fresh id, stamps the creation date and persists.
    ///
    /// # Returns
    /// * `Ok(CustomerForDisplay)` - The stored customer including generated fields
    /// * `Err(ValidationFailed)` - Every rule violation; storage is untouched
    async fn create(&self, candidate: CustomerForCreation) -> ServiceResult<CustomerForDisplay>;

    /// Replaces all mutable fields of an existing customer.
    ///
    /// Existence is checked before the payload is validated, so an unknown id
    /// yields `NotFound` even for an invalid payload.
    async fn update(&self, id: Uuid, candidate: CustomerForUpdate) -> ServiceResult<()>;

    /// Hard-deletes a customer. Deleting twice yields `NotFound`.
    async fn delete(&self, id: Uuid) -> ServiceResult<()>;

    async fn exists(&self, id: Uuid) -> ServiceResult<bool>;
}
