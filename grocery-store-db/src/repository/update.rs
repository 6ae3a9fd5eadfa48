use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for replacing a stored entity
///
/// The entity is matched on its identifier and its mutable fields are
/// overwritten in full. Creation metadata is never rewritten.
/// Replacing an entity that no longer exists is not an error; callers that
/// care check existence first.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<T: Identifiable + Send + 'static>: Send + Sync {
    /// # Arguments
    /// * `item` - The entity carrying the replacement values
    ///
    /// # Returns
    /// * `Ok(())` - The statement was executed
    /// * `Err` - An error if the update could not be executed
    async fn update(&self, item: T) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
