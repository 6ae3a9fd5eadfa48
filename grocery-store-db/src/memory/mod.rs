pub mod customer_repository;
pub mod seed;

pub use customer_repository::InMemoryCustomerRepository;
pub use seed::seed_customers;
