//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Error with code, message and optional details
//! - [`ErrorResponse`]: JSON body sent to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::with_message(ErrorCode::EmployeeNotFound, "Employee with email a@b.com not found")
//!     .with_detail("email", "a@b.com");
//!
//! let response = ErrorResponse::from(&err);
//! assert_eq!(response.code, 8001);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorResponse};
