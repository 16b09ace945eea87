//! Shared types, formatting, errors, and configuration for Abrechnung.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Money rounding rules with decimal precision
//! - The German number/date formatting contract used by every renderer
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use config::{AppConfig, DeviceRentalPolicy, EngineConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use format::{format_date_german, format_euro, format_german_number};
