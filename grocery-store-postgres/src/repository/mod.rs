pub mod customer_repository;
pub mod db_init;

pub use customer_repository::CustomerRepositoryImpl;
pub use db_init::{cleanup_database, init_database};
