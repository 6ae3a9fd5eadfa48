use async_trait::async_trait;
use parking_lot::RwLock;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::customer::CustomerModel;
use crate::models::identifiable::Identifiable;
use crate::repository::{Create, DeleteById, ExistById, FindAll, FindById, Update};

/// Customer storage held in process memory.
///
/// Records keep insertion order. Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Vec<CustomerModel>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<CustomerModel>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
        }
    }

    pub fn len(&self) -> usize {
        self.customers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.read().is_empty()
    }
}

#[async_trait]
impl Create<CustomerModel> for InMemoryCustomerRepository {
    async fn create(&self, item: CustomerModel) -> Result<CustomerModel, Box<dyn Error + Send + Sync>> {
        if !item.has_assigned_id() {
            return Err("Customer id must be assigned before insert".into());
        }

        let mut customers = self.customers.write();
        if customers.iter().any(|c| c.id == item.id) {
            return Err(format!("Duplicate customer id {}", item.id).into());
        }
        customers.push(item.clone());
        tracing::trace!(customer_id = %item.id, "customer inserted in memory");
        Ok(item)
    }
}

#[async_trait]
impl FindById<CustomerModel> for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.customers.read().iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl FindAll<CustomerModel> for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.customers.read().clone())
    }
}

#[async_trait]
impl ExistById for InMemoryCustomerRepository {
    async fn exist_by_id(&self, id: Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.customers.read().iter().any(|c| c.id == id))
    }
}

#[async_trait]
impl Update<CustomerModel> for InMemoryCustomerRepository {
    async fn update(&self, item: CustomerModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut customers = self.customers.write();
        if let Some(stored) = customers.iter_mut().find(|c| c.id == item.id) {
            // Creation metadata stays as stored
            let created_date = stored.created_date;
            *stored = CustomerModel {
                created_date,
                ..item
            };
        }
        Ok(())
    }
}

#[async_trait]
impl DeleteById for InMemoryCustomerRepository {
    async fn delete_by_id(&self, id: Uuid) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.customers.write().retain(|c| c.id != id);
        Ok(())
    }
}
