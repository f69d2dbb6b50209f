//! Core business logic for the CoSA budget dashboard.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Budgets, the organization tree, records, and dashboard pages all live here.
//!
//! # Modules
//!
//! - `budget` - Budget rows and the aggregation model
//! - `hierarchy` - Organization, councils, and clubs
//! - `records` - Expenses, external funding, and sources of fund
//! - `dashboard` - Read-models for the presentation layer
//! - `snapshot` - JSON hand-off format
//! - `fixture` - Sample organization

pub mod budget;
pub mod dashboard;
pub mod fixture;
pub mod hierarchy;
pub mod records;
pub mod snapshot;
