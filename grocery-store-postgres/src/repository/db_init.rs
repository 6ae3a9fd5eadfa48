//! Database initialization and cleanup utilities
//!
//! `migrations/` is embedded at build time and applied through sqlx's
//! migrator, which records applied versions in `_sqlx_migrations`.
//! `cleanup/` drops the customer table together with that record so a
//! later [`init_database`] rebuilds the schema from scratch.

use sqlx::migrate::Migrator;
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const CLEANUP_SQL: &str = include_str!("../../cleanup/0001_drop_customer.sql");

/// Initialize the database by applying every pending migration
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use grocery_store_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    tracing::debug!(migrations = MIGRATOR.iter().count(), "database schema is current");
    Ok(())
}

/// Cleanup the database by dropping the customer schema and its migration history
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use grocery_store_postgres::repository::db_init::cleanup_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// cleanup_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CLEANUP_SQL).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use super::*;
    use crate::test_helper::database_url;

    #[tokio::test]
    #[ignore]
    async fn test_init_and_cleanup() -> Result<(), Box<dyn std::error::Error>> {
        let pool = PgPool::connect(&database_url()).await?;

        cleanup_database(&pool).await?;
        init_database(&pool).await?;
        // Applied migrations are skipped on the second run
        init_database(&pool).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 5);

        cleanup_database(&pool).await?;
        let table: Option<String> = sqlx::query_scalar("SELECT to_regclass('customer')::text")
            .fetch_one(&pool)
            .await?;
        assert_eq!(table, None);
        let history: Option<String> =
            sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations')::text")
                .fetch_one(&pool)
                .await?;
        assert_eq!(history, None);

        // Leave the schema in place for the other tests
        init_database(&pool).await?;

        Ok(())
    }
}
