pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemoryCustomerRepository;
pub use models::*;
pub use repository::*;
