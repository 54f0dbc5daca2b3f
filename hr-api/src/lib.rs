//! hr-api: employee lookup service
//!
//! Exposes `GET /employees/{email}` over a MySQL `employees` table. Each lookup
//! waits through a simulated dependency delay, queries the store by exact
//! email and returns a normalized response, a 404, or an opaque 500.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod services;
pub mod state;

pub use config::Config;
pub use state::AppState;
