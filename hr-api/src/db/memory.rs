//! In-memory employee store
//!
//! Stands in for MySQL in tests and local experiments.

use std::collections::HashMap;

use async_trait::async_trait;
use shared::models::employee::Employee;

use super::{EmployeeStore, StoreResult};

/// Employees keyed by exact email
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    employees: HashMap<String, Employee>,
}

impl MemoryEmployeeStore {
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        let mut store = Self::default();
        for employee in employees {
            store.insert(employee);
        }
        store
    }

    /// Insert or replace the employee with the same email
    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.email.clone(), employee);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Employee>> {
        Ok(self.employees.get(email).cloned())
    }
}
