use uuid::Uuid;

/// Trait for entities that can be uniquely identified by a UUID
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;

    /// The nil UUID marks an entity that was never given an identity.
    fn has_assigned_id(&self) -> bool {
        !self.get_id().is_nil()
    }
}
