//! The organization tree and its derived total.

use std::collections::HashSet;

use cosa_shared::types::EntityId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::budget::{Aggregator, BudgetData};

use super::error::HierarchyError;
use super::types::{Club, Council, CouncilSnapshot};

/// The organization as stored by the persistence service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSnapshot {
    /// Organization name.
    pub name: String,
    /// Academic year the figures belong to, e.g. `2025-26`.
    pub academic_year: String,
    /// Councils with their member clubs.
    pub councils: Vec<CouncilSnapshot>,
    /// Clubs that report directly to the organization.
    #[serde(default)]
    pub independent_clubs: Vec<Club>,
    /// Organization-level budget not attributed to any club.
    #[serde(default)]
    pub misc: BudgetData,
}

/// Where a club sits in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClubParent<'a> {
    /// Member of a council.
    Council(&'a Council),
    /// Reports directly to the organization.
    Independent,
}

impl ClubParent<'_> {
    /// Display label for the parent.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Council(council) => council.name(),
            Self::Independent => "Independent Club",
        }
    }
}

/// A club together with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubLocation<'a> {
    /// The club.
    pub club: &'a Club,
    /// Its parent.
    pub parent: ClubParent<'a>,
}

/// The organization with every derived budget computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    name: String,
    academic_year: String,
    councils: Vec<Council>,
    independent_clubs: Vec<Club>,
    misc: BudgetData,
    total: BudgetData,
}

impl Organization {
    /// Builds the tree from a snapshot, deriving council and organization budgets.
    ///
    /// # Errors
    ///
    /// Returns `HierarchyError::DuplicateEntity` if any slug appears twice.
    pub fn from_snapshot(snapshot: OrganizationSnapshot) -> Result<Self, HierarchyError> {
        ensure_unique_ids(&snapshot)?;

        let councils: Vec<Council> = snapshot.councils.into_iter().map(Council::from).collect();
        let total = Self::derive_total(&councils, &snapshot.independent_clubs, &snapshot.misc);

        debug!(
            organization = %snapshot.name,
            councils = councils.len(),
            independent_clubs = snapshot.independent_clubs.len(),
            "Organization budgets derived"
        );

        Ok(Self {
            name: snapshot.name,
            academic_year: snapshot.academic_year,
            councils,
            independent_clubs: snapshot.independent_clubs,
            misc: snapshot.misc,
            total,
        })
    }

    fn derive_total(councils: &[Council], independent: &[Club], misc: &BudgetData) -> BudgetData {
        Aggregator::sum(
            councils
                .iter()
                .map(Council::budget)
                .chain(independent.iter().map(|c| &c.budget))
                .chain(std::iter::once(misc)),
        )
    }

    /// Organization name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Academic year label.
    #[must_use]
    pub fn academic_year(&self) -> &str {
        &self.academic_year
    }

    /// Councils in snapshot order.
    #[must_use]
    pub fn councils(&self) -> &[Council] {
        &self.councils
    }

    /// Clubs outside any council.
    #[must_use]
    pub fn independent_clubs(&self) -> &[Club] {
        &self.independent_clubs
    }

    /// Budget not attributed to any club.
    #[must_use]
    pub const fn misc(&self) -> &BudgetData {
        &self.misc
    }

    /// Organization-wide budget derived from councils, independent clubs, and misc.
    #[must_use]
    pub const fn total(&self) -> &BudgetData {
        &self.total
    }

    /// Number of councils.
    #[must_use]
    pub fn council_count(&self) -> usize {
        self.councils.len()
    }

    /// Number of clubs across councils plus independent clubs.
    #[must_use]
    pub fn club_count(&self) -> usize {
        self.councils.iter().map(|c| c.clubs().len()).sum::<usize>() + self.independent_clubs.len()
    }

    /// Iterates over every club with its parent.
    pub fn clubs(&self) -> impl Iterator<Item = ClubLocation<'_>> {
        self.councils
            .iter()
            .flat_map(|council| {
                council.clubs().iter().map(move |club| ClubLocation {
                    club,
                    parent: ClubParent::Council(council),
                })
            })
            .chain(self.independent_clubs.iter().map(|club| ClubLocation {
                club,
                parent: ClubParent::Independent,
            }))
    }

    /// Finds a club anywhere in the tree.
    #[must_use]
    pub fn find_club(&self, id: &EntityId) -> Option<ClubLocation<'_>> {
        self.clubs().find(|loc| &loc.club.id == id)
    }

    /// Finds a council.
    #[must_use]
    pub fn find_council(&self, id: &EntityId) -> Option<&Council> {
        self.councils.iter().find(|c| c.id() == id)
    }

    /// Returns a new organization with one club's budget replaced.
    ///
    /// The owning council is rebuilt through [`Council::with_club_budget`] and the
    /// organization total is re-derived.
    ///
    /// # Errors
    ///
    /// Returns `HierarchyError::ClubNotFound` if no club has this slug.
    pub fn with_club_budget(&self, id: &EntityId, budget: BudgetData) -> Result<Self, HierarchyError> {
        let mut updated = self.clone();

        if let Some(council) = updated.councils.iter_mut().find(|c| c.club(id).is_some()) {
            *council = council.with_club_budget(id, budget)?;
        } else if let Some(club) = updated.independent_clubs.iter_mut().find(|c| &c.id == id) {
            club.budget = budget;
        } else {
            return Err(HierarchyError::ClubNotFound(id.clone()));
        }

        updated.total = Self::derive_total(&updated.councils, &updated.independent_clubs, &updated.misc);
        Ok(updated)
    }

    /// Converts back into the stored form, dropping derived figures.
    #[must_use]
    pub fn to_snapshot(&self) -> OrganizationSnapshot {
        OrganizationSnapshot {
            name: self.name.clone(),
            academic_year: self.academic_year.clone(),
            councils: self.councils.iter().map(Council::to_snapshot).collect(),
            independent_clubs: self.independent_clubs.clone(),
            misc: self.misc,
        }
    }
}

fn ensure_unique_ids(snapshot: &OrganizationSnapshot) -> Result<(), HierarchyError> {
    let mut seen = HashSet::new();
    let ids = snapshot
        .councils
        .iter()
        .flat_map(|c| std::iter::once(&c.id).chain(c.clubs.iter().map(|club| &club.id)))
        .chain(snapshot.independent_clubs.iter().map(|club| &club.id));

    for id in ids {
        if !seen.insert(id) {
            return Err(HierarchyError::DuplicateEntity(id.clone()));
        }
    }
    Ok(())
}
