//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::db::{self, EmployeeStore, MySqlEmployeeStore};
use crate::error::BoxError;
use crate::services::{EmployeeService, SimulatedLatency};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Employee lookups
    pub employees: EmployeeService,
}

impl AppState {
    /// Connect to MySQL and wire the services
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database, config.environment).await?;
        let store = Arc::new(MySqlEmployeeStore::new(pool));
        Ok(Self::from_parts(store, config.latency))
    }

    /// Build state over any store
    pub fn from_parts(store: Arc<dyn EmployeeStore>, latency: SimulatedLatency) -> Self {
        Self {
            employees: EmployeeService::new(store, latency),
        }
    }
}
