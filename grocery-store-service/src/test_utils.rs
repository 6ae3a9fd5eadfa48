//! Storage gateways with scripted behaviour for service tests.

use async_trait::async_trait;
use grocery_store_db::memory::InMemoryCustomerRepository;
use grocery_store_db::models::customer::CustomerModel;
use grocery_store_db::repository::{Create, DeleteById, ExistById, FindAll, FindById, Update};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use uuid::Uuid;

/// Delegates to an in-memory store and counts every gateway call.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryCustomerRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Create<CustomerModel> for CountingRepository {
    async fn create(&self, item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        self.record();
        self.inner.create(item).await
    }
}

#[async_trait]
impl FindById<CustomerModel> for CountingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        self.record();
        self.inner.find_by_id(id).await
    }
}

#[async_trait]
impl FindAll<CustomerModel> for CountingRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        self.record();
        self.inner.find_all().await
    }
}

#[async_trait]
impl ExistById for CountingRepository {
    async fn exist_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        self.record();
        self.inner.exist_by_id(id).await
    }
}

#[async_trait]
impl Update<CustomerModel> for CountingRepository {
    async fn update(&self, item: CustomerModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.record();
        self.inner.update(item).await
    }
}

#[async_trait]
impl DeleteById for CountingRepository {
    async fn delete_by_id(&self, id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.record();
        self.inner.delete_by_id(id).await
    }
}

/// Every call fails with a driver-looking error.
pub struct FailingRepository;

impl FailingRepository {
    pub const MESSAGE: &'static str = "connection refused (os error 111)";

    fn fault<T>() -> Result<T, Box<dyn Error + Send + Sync>> {
        Err(Self::MESSAGE.into())
    }
}

#[async_trait]
impl Create<CustomerModel> for FailingRepository {
    async fn create(&self, _item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        Self::fault()
    }
}

#[async_trait]
impl FindById<CustomerModel> for FailingRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Self::fault()
    }
}

#[async_trait]
impl FindAll<CustomerModel> for FailingRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Self::fault()
    }
}

#[async_trait]
impl ExistById for FailingRepository {
    async fn exist_by_id(&self, _id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::fault()
    }
}

#[async_trait]
impl Update<CustomerModel> for FailingRepository {
    async fn update(&self, _item: CustomerModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::fault()
    }
}

#[async_trait]
impl DeleteById for FailingRepository {
    async fn delete_by_id(&self, _id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::fault()
    }
}

/// Sleeps before answering from an empty in-memory store.
pub struct SlowRepository {
    inner: InMemoryCustomerRepository,
    delay: Duration,
}

impl SlowRepository {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryCustomerRepository::new(),
            delay,
        }
    }
}

#[async_trait]
impl Create<CustomerModel> for SlowRepository {
    async fn create(&self, item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(item).await
    }
}

#[async_trait]
impl FindById<CustomerModel> for SlowRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_id(id).await
    }
}

#[async_trait]
impl FindAll<CustomerModel> for SlowRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_all().await
    }
}

#[async_trait]
impl ExistById for SlowRepository {
    async fn exist_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        tokio::time::sleep(self.delay).await;
        self.inner.exist_by_id(id).await
    }
}

#[async_trait]
impl Update<CustomerModel> for SlowRepository {
    async fn update(&self, item: CustomerModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        tokio::time::sleep(self.delay).await;
        self.inner.update(item).await
    }
}

#[async_trait]
impl DeleteById for SlowRepository {
    async fn delete_by_id(&self, id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete_by_id(id).await
    }
}
