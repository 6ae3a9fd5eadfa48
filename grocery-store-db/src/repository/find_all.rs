use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for reading every entity of a kind
///
/// Items come back in storage order. No paging is applied.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait FindAll<T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(Vec<T>)` - All stored entities, possibly empty
    /// * `Err` - An error if the query could not be executed
    async fn find_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
