//! Shared types, roles, errors, and configuration for the CoSA budget dashboard.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision and Indian-style formatting
//! - Typed IDs for records and entity slugs
//! - Roles and the capability policy that gates write actions
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::{Action, Role, Viewer, has_capability};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
