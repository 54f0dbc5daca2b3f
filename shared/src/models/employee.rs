//! Employee Model

use chrono::NaiveDateTime;
use rust_decimal::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Scale of the `salary` column (DECIMAL(10,2))
pub const SALARY_SCALE: u32 = 2;

/// Employee entity (one row of the `employees` table)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique; lookups compare it byte for byte
    pub email: String,
    pub salary: Decimal,
    pub department: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Employee {
    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employee lookup response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeResponse {
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
}

/// Salary that has no `f64` representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("salary {0} cannot be converted to a number")]
pub struct SalaryConversionError(pub Decimal);

/// Convert a stored salary to a plain number, rounded to 2 decimal places (half-up)
pub fn salary_to_f64(value: Decimal) -> Result<f64, SalaryConversionError> {
    value
        .round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or(SalaryConversionError(value))
}

impl TryFrom<&Employee> for EmployeeResponse {
    type Error = SalaryConversionError;

    fn try_from(employee: &Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: employee.full_name(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            salary: salary_to_f64(employee.salary)?,
        })
    }
}
