//! Business services

pub mod employee;
pub mod latency;

pub use employee::EmployeeService;
pub use latency::{InvalidLatencyWindow, SimulatedLatency};
