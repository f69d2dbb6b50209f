//! Roles and the capability policy for dashboard actions.
//!
//! The authorization provider issues a role string per user. It is parsed once
//! into [`Role`] and every gated operation asks [`has_capability`] instead of
//! comparing role strings.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Role assigned to a user by the authorization provider.
///
/// Roles are ordered from lowest to highest privilege.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Can browse budgets and records.
    #[default]
    Viewer,
    /// Can submit expenses and external funding and review expenses.
    Admin,
    /// Full access, including allocations and role management.
    SuperAdmin,
}

impl Role {
    /// Parse a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "viewer" => Some(Self::Viewer),
            "admin" => Some(Self::Admin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Browse budgets, expenses, and funding records.
    ViewBudgets,
    /// Submit an expense for approval.
    SubmitExpense,
    /// Record external funding for an entity.
    SubmitExternalFunding,
    /// Move an expense through its approval lifecycle.
    ReviewExpense,
    /// Change an entity's authoritative budget figures.
    EditAllocation,
    /// Grant or revoke roles.
    ManageRoles,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::ViewBudgets,
        Self::SubmitExpense,
        Self::SubmitExternalFunding,
        Self::ReviewExpense,
        Self::EditAllocation,
        Self::ManageRoles,
    ];
}

/// Returns true if `role` may perform `action`.
#[must_use]
pub const fn has_capability(role: Role, action: Action) -> bool {
    match role {
        Role::SuperAdmin => true,
        Role::Admin => matches!(
            action,
            Action::ViewBudgets
                | Action::SubmitExpense
                | Action::SubmitExternalFunding
                | Action::ReviewExpense
        ),
        Role::Viewer => matches!(action, Action::ViewBudgets),
    }
}

/// The current authenticated user as seen by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// User ID issued by the authentication provider.
    pub user_id: UserId,
    /// Role claim.
    pub role: Role,
}

impl Viewer {
    /// Creates a viewer with an explicit role.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Creates a viewer from a raw role claim; unknown roles degrade to `viewer`.
    #[must_use]
    pub fn from_claim(user_id: UserId, role: &str) -> Self {
        Self {
            user_id,
            role: Role::parse(role).unwrap_or_default(),
        }
    }

    /// Returns true if this user may perform `action`.
    #[must_use]
    pub const fn can(&self, action: Action) -> bool {
        has_capability(self.role, action)
    }
}
