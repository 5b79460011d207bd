//! Common utilities shared across the services.
//!
//! This crate provides:
//! - Unified error handling for the CLI commands
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
