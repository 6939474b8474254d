//! IBAS API - daily bike production records over HTTP
//!
//! The service reads a CSV file of daily production figures once at startup
//! and serves the parsed records as JSON:
//! - Environment-aware CSV path resolution
//! - Lenient CSV ingestion that skips malformed rows
//! - A read-only snapshot shared across requests

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod types;

pub use error::{Error, Result};
