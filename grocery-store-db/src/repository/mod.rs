pub mod create;
pub mod customer_repository;
pub mod delete_by_id;
pub mod exist_by_id;
pub mod find_all;
pub mod find_by_id;
pub mod update;

// Re-exports
pub use create::*;
pub use customer_repository::*;
pub use delete_by_id::*;
pub use exist_by_id::*;
pub use find_all::*;
pub use find_by_id::*;
pub use update::*;
