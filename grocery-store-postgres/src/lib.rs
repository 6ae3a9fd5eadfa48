pub mod postgres_repositories;
pub mod repository;

pub use postgres_repositories::{PostgresConfig, PostgresRepositories};
pub use repository::customer_repository::CustomerRepositoryImpl;
pub use repository::db_init::{cleanup_database, init_database};

#[cfg(test)]
pub mod test_helper;
