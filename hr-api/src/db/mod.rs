//! Database access layer

pub mod employee;
pub mod memory;

pub use employee::MySqlEmployeeStore;
pub use memory::MemoryEmployeeStore;

use async_trait::async_trait;
use shared::models::employee::Employee;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;

use crate::config::{DatabaseConfig, Environment};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Failure of a non-sqlx backend
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Anything employees can be looked up in
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Find the employee whose email equals `email` byte for byte
    ///
    /// No trimming and no case folding: `A@b.com` does not match `a@b.com`.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Employee>>;
}

/// Open the MySQL pool; in development also bring the schema up to date
pub async fn connect(config: &DatabaseConfig, environment: Environment) -> StoreResult<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options(environment))
        .await?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connected to MySQL"
    );

    if environment.is_development() {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Schema synchronized");
    }

    Ok(pool)
}
