pub mod customer;
pub mod identifiable;

// Re-exports
pub use customer::*;
pub use identifiable::*;
