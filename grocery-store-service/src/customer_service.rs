use async_trait::async_trait;
use chrono::Utc;
use grocery_store_api::domain::customer::{
    CustomerForCreation, CustomerForDisplay, CustomerForUpdate,
};
use grocery_store_api::domain::validation::{validate, ValidationErrors};
use grocery_store_api::error::{ServiceError, ServiceResult};
use grocery_store_api::service::CustomerService;
use grocery_store_db::models::customer::CustomerModel;
use grocery_store_db::repository::{
    Create, CustomerRepository, DeleteById, ExistById, FindAll, FindById, Update,
};
use std::error::Error;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upper bound for every storage gateway call.
    pub storage_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    pub fn with_storage_timeout(storage_timeout: Duration) -> Self {
        Self { storage_timeout }
    }
}

/// Customer lifecycle over a storage gateway.
///
/// Enforces when storage may be mutated: validation before every write,
/// existence before validation for update and delete, service-owned ids
/// and timestamps. Holds no locks of its own; concurrent writers resolve
/// as last-writer-wins inside the gateway.
pub struct CustomerServiceImpl<R: CustomerRepository> {
    repository: Arc<R>,
    config: ServiceConfig,
}

impl<R: CustomerRepository> CustomerServiceImpl<R> {
    pub fn new(repository: Arc<R>, config: ServiceConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Runs one gateway call under the configured timeout.
    ///
    /// Faults and timeouts both become `StorageFailure`; the underlying error
    /// is logged here and dropped. No retries.
    async fn storage<T, F>(&self, operation: &'static str, call: F) -> ServiceResult<T>
    where
        F: Future<Output = Result<T, Box<dyn Error + Send + Sync>>>,
    {
        match tokio::time::timeout(self.config.storage_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => {
                tracing::error!(operation, error = %error, "storage gateway call failed");
                Err(ServiceError::StorageFailure(format!("{operation} failed")))
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout_ms = self.config.storage_timeout.as_millis() as u64,
                    "storage gateway call timed out"
                );
                Err(ServiceError::StorageFailure(format!("{operation} timed out")))
            }
        }
    }

    async fn ensure_exists(&self, id: Uuid) -> ServiceResult<()> {
        if self.storage("exist_by_id", self.repository.exist_by_id(id)).await? {
            Ok(())
        } else {
            tracing::debug!(customer_id = %id, "customer not found");
            Err(ServiceError::NotFound(id))
        }
    }
}

fn reject_nil(id: Uuid) -> ServiceResult<()> {
    if id.is_nil() {
        Err(ServiceError::nil_id())
    } else {
        Ok(())
    }
}

fn validation_failed(operation: &'static str, errors: ValidationErrors) -> ServiceError {
    tracing::warn!(operation, violations = %errors, "customer payload rejected");
    ServiceError::ValidationFailed(errors)
}

#[async_trait]
impl<R: CustomerRepository + 'static> CustomerService for CustomerServiceImpl<R> {
    async fn list(&self) -> ServiceResult<Vec<CustomerForDisplay>> {
        let customers = self.storage("find_all", self.repository.find_all()).await?;
        Ok(customers.into_iter().map(CustomerForDisplay::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<CustomerForDisplay> {
        reject_nil(id)?;
        self.storage("find_by_id", self.repository.find_by_id(id))
            .await?
            .map(CustomerForDisplay::from)
            .ok_or(ServiceError::NotFound(id))
    }

    async fn create(&self, candidate: CustomerForCreation) -> ServiceResult<CustomerForDisplay> {
        validate(&candidate).map_err(|errors| validation_failed("create", errors))?;

        let customer = CustomerModel::from_creation(candidate, Uuid::new_v4(), Utc::now());
        let stored = self.storage("create", self.repository.create(customer)).await?;

        tracing::info!(customer_id = %stored.id, "customer created");
        Ok(stored.into())
    }

    async fn update(&self, id: Uuid, candidate: CustomerForUpdate) -> ServiceResult<()> {
        reject_nil(id)?;
        self.ensure_exists(id).await?;
        validate(&candidate).map_err(|errors| validation_failed("update", errors))?;

        // Deleted between the existence check and now
        let current = self
            .storage("find_by_id", self.repository.find_by_id(id))
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        let replacement = current.with_update(candidate, Utc::now());
        self.storage("update", self.repository.update(replacement)).await?;

        tracing::info!(customer_id = %id, "customer updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        reject_nil(id)?;
        self.ensure_exists(id).await?;
        self.storage("delete_by_id", self.repository.delete_by_id(id)).await?;

        tracing::info!(customer_id = %id, "customer deleted");
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> ServiceResult<bool> {
        reject_nil(id)?;
        self.storage("exist_by_id", self.repository.exist_by_id(id)).await
    }
}
