//! Service-layer error type
//!
//! `ServiceError` sits between store/transform failures and the API-layer
//! `AppError`, so services can use `?` and still hand clients an opaque error.

use shared::error::AppError;
use shared::models::employee::SalaryConversionError;
use thiserror::Error;

use crate::db::StoreError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Infrastructure or transform failure inside a service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store or driver failure
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Row that cannot be shaped into a response
    #[error(transparent)]
    Salary(#[from] SalaryConversionError),
}

impl ServiceError {
    /// Log the cause and collapse into an opaque internal `AppError` carrying `message`
    pub fn into_app_error(self, message: &str) -> AppError {
        tracing::error!(error = %self, "{message}");
        AppError::internal(message)
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
