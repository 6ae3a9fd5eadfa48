use grocery_store_api::service::CustomerService;
use grocery_store_db::memory::{seed_customers, InMemoryCustomerRepository};
use grocery_store_postgres::{init_database, PostgresConfig, PostgresRepositories};
use grocery_store_service::{CustomerServiceImpl, ServiceConfig};
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};

// =============================================================================
// AppState
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerService>,
}

impl AppState {
    #[must_use]
    pub fn new(customers: Arc<dyn CustomerService>) -> Self {
        Self { customers }
    }

    /// Wires the customer service to the configured storage backend.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let service_config = ServiceConfig::with_storage_timeout(config.storage_timeout);

        let customers: Arc<dyn CustomerService> = match config.storage {
            StorageBackend::Memory => {
                tracing::info!("using in-memory customer storage");
                let repository = InMemoryCustomerRepository::with_customers(seed_customers());
                Arc::new(CustomerServiceImpl::new(Arc::new(repository), service_config))
            }
            StorageBackend::Postgres => {
                let mut pg_config = PostgresConfig::new(config.database_url.clone());
                pg_config.max_connections = config.database_max_connections;

                let repos = PostgresRepositories::connect(&pg_config)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to create PostgreSQL pool: {}", e))?;
                if config.init_database {
                    init_database(repos.pool())
                        .await
                        .map_err(|e| anyhow::anyhow!("Failed to initialize database: {}", e))?;
                }
                Arc::new(CustomerServiceImpl::new(
                    repos.customer_repository(),
                    service_config,
                ))
            }
        };

        Ok(Self::new(customers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_starts_seeded() {
        let config = AppConfig {
            storage: StorageBackend::Memory,
            ..AppConfig::default()
        };

        let state = AppState::from_config(&config).await.unwrap();

        assert_eq!(state.customers.list().await.unwrap().len(), 5);
    }
}
