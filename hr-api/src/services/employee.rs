//! Employee lookup service

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::employee::EmployeeResponse;

use super::SimulatedLatency;
use crate::db::EmployeeStore;
use crate::error::ServiceResult;

/// Client-facing message for any lookup failure
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching employee data";

/// Looks employees up by email and shapes them for the API
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    latency: SimulatedLatency,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>, latency: SimulatedLatency) -> Self {
        Self { store, latency }
    }

    /// Find an employee by exact email
    ///
    /// `Ok(None)` means the query ran and nothing matched. Every failure
    /// (store, driver, row conversion) is logged and comes back as the same
    /// opaque internal error.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<EmployeeResponse>> {
        self.lookup(email)
            .await
            .map_err(|e| e.into_app_error(FETCH_FAILED_MESSAGE))
    }

    async fn lookup(&self, email: &str) -> ServiceResult<Option<EmployeeResponse>> {
        self.latency.wait().await;

        let Some(employee) = self.store.find_by_email(email).await? else {
            tracing::debug!(email, "No employee matches email");
            return Ok(None);
        };

        Ok(Some(EmployeeResponse::try_from(&employee)?))
    }
}
