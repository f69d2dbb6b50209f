//! Organization → council → club tree.
//!
//! Clubs hold authoritative budgets. Council and organization budgets are
//! always derived from the current children and rebuilt whole on every change.

pub mod error;
pub mod organization;
pub mod types;

pub use error::HierarchyError;
pub use organization::{ClubLocation, ClubParent, Organization, OrganizationSnapshot};
pub use types::{Club, Council, CouncilSnapshot, CouncilType};
