//! Dashboard read-models.
//!
//! This module turns one organization snapshot into the pages the
//! presentation layer renders:
//! - Landing page with quick stats, council cards, and independent clubs
//! - Council and club detail pages
//! - Fund booking, expenditure, and income pages

pub mod error;
pub mod service;
pub mod types;


pub use error::DashboardError;
pub use service::DashboardService;
pub use types::*;
