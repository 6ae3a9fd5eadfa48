use sqlx::PgPool;
use std::sync::Arc;

/// PostgreSQL storage gateway for customers.
///
/// Each call borrows a connection from the shared pool; no transaction spans
/// more than one statement.
pub struct CustomerRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl CustomerRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
