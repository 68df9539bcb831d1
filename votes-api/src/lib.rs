//! Votes API Library
//!
//! This library provides the HTTP surface of the voting service, including
//! configuration management, error handling, and dependency injection.

pub mod config;
pub mod errors;
pub mod server;

pub use config::{Dependencies, Settings};
pub use errors::{ApiError, ConfigError, ServiceError};
