//! Employee database operations

use async_trait::async_trait;
use shared::models::employee::Employee;
use sqlx::MySqlPool;

use super::{EmployeeStore, StoreResult};

/// `employees` table behind a MySQL pool
#[derive(Clone)]
pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Employee>> {
        // The column collation is case-insensitive and pads trailing spaces.
        // The unique index still yields at most one candidate, checked exactly below.
        let candidate: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, salary,
                   department, created_at, updated_at
            FROM employees
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(candidate.filter(|employee| employee.email == email))
    }
}
