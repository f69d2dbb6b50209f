//! Club and council types.

use cosa_shared::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::budget::{Aggregator, BudgetData};

use super::error::HierarchyError;

/// Council classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouncilType {
    /// Cultural activities.
    Cultural,
    /// Sports.
    Sports,
    /// Science and technology.
    Scitech,
    /// Academic affairs.
    Academics,
}

impl CouncilType {
    /// Returns the string representation of the council type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cultural => "cultural",
            Self::Sports => "sports",
            Self::Scitech => "scitech",
            Self::Academics => "academics",
        }
    }
}

/// A leaf budget-holding entity with authoritative figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Club slug.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Authoritative budget.
    pub budget: BudgetData,
}

impl Club {
    /// Creates a club.
    #[must_use]
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, budget: BudgetData) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            budget,
        }
    }
}

/// A council as stored by the persistence service: clubs only, no derived figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilSnapshot {
    /// Council slug.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Council classification.
    pub council_type: CouncilType,
    /// Member clubs.
    pub clubs: Vec<Club>,
}

/// A council whose budget is derived from its clubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Council {
    id: EntityId,
    name: String,
    council_type: CouncilType,
    clubs: Vec<Club>,
    budget: BudgetData,
}

impl Council {
    /// Creates a council and derives its budget from `clubs`.
    #[must_use]
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        council_type: CouncilType,
        clubs: Vec<Club>,
    ) -> Self {
        let budget = Aggregator::sum(clubs.iter().map(|c| &c.budget));
        Self {
            id: id.into(),
            name: name.into(),
            council_type,
            clubs,
            budget,
        }
    }

    /// Council slug.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Council classification.
    #[must_use]
    pub const fn council_type(&self) -> CouncilType {
        self.council_type
    }

    /// Member clubs.
    #[must_use]
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    /// Budget derived from the member clubs.
    #[must_use]
    pub const fn budget(&self) -> &BudgetData {
        &self.budget
    }

    /// Looks up a member club.
    #[must_use]
    pub fn club(&self, id: &EntityId) -> Option<&Club> {
        self.clubs.iter().find(|c| &c.id == id)
    }

    /// Returns a copy of this council with one club's budget replaced.
    ///
    /// The council budget is re-derived from every club.
    ///
    /// # Errors
    ///
    /// Returns `HierarchyError::ClubNotFound` if the club is not a member.
    pub fn with_club_budget(&self, id: &EntityId, budget: BudgetData) -> Result<Self, HierarchyError> {
        if self.club(id).is_none() {
            return Err(HierarchyError::ClubNotFound(id.clone()));
        }

        let clubs = self
            .clubs
            .iter()
            .map(|c| {
                if &c.id == id {
                    Club { budget, ..c.clone() }
                } else {
                    c.clone()
                }
            })
            .collect();

        Ok(Self::new(
            self.id.clone(),
            self.name.clone(),
            self.council_type,
            clubs,
        ))
    }

    /// Converts back into the stored form.
    #[must_use]
    pub fn to_snapshot(&self) -> CouncilSnapshot {
        CouncilSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            council_type: self.council_type,
            clubs: self.clubs.clone(),
        }
    }
}

impl From<CouncilSnapshot> for Council {
    fn from(snapshot: CouncilSnapshot) -> Self {
        Self::new(
            snapshot.id,
            snapshot.name,
            snapshot.council_type,
            snapshot.clubs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetRow;
    use crate::fixture::budget_for;
    use rust_decimal_macros::dec;

    fn cultural() -> Council {
        Council::new(
            "cultural",
            "Cultural Council",
            CouncilType::Cultural,
            vec![
                Club::new("beatbackers", "Beatbackers", budget_for(dec!(50000))),
                Club::new("gols", "General Oratory and Literary Society", budget_for(dec!(45000))),
                Club::new("drishya", "Drishya", budget_for(dec!(60000))),
            ],
        )
    }

    #[test]
    fn test_council_budget_is_sum_of_clubs() {
        let council = cultural();
        let total = &council.budget().total;

        assert_eq!(total.funds_allocated, dec!(155000));
        assert_eq!(total.expenditure, dec!(54250));
        assert_eq!(total.fund_booking, dec!(23250));
        assert_eq!(total.external_funding, dec!(23250));
    }

    #[test]
    fn test_council_remaining_matches_clubs() {
        let council = cultural();
        let expected: rust_decimal::Decimal = council
            .clubs()
            .iter()
            .map(|c| Aggregator::remaining(&c.budget.total))
            .sum();

        assert_eq!(Aggregator::remaining(&council.budget().total), expected);
        assert_eq!(expected, dec!(100750));
    }

    #[test]
    fn test_council_without_clubs_has_zero_budget() {
        let council = Council::new("academics", "Academic Council", CouncilType::Academics, vec![]);
        assert_eq!(council.budget(), &BudgetData::ZERO);
    }

    #[test]
    fn test_with_club_budget_rederives_council() {
        let council = cultural();
        let zeroed = council
            .with_club_budget(&EntityId::new("drishya"), BudgetData::ZERO)
            .unwrap();

        assert_eq!(zeroed.budget().total.funds_allocated, dec!(95000));
        // The source council is untouched.
        assert_eq!(council.budget().total.funds_allocated, dec!(155000));
    }

    #[test]
    fn test_with_club_budget_unknown_club() {
        let err = cultural()
            .with_club_budget(
                &EntityId::new("cricket"),
                BudgetData::from_categories(BudgetRow::ZERO, BudgetRow::ZERO),
            )
            .unwrap_err();

        assert!(matches!(err, HierarchyError::ClubNotFound(id) if id.as_str() == "cricket"));
    }

    #[test]
    fn test_snapshot_roundtrip_rederives() {
        let council = cultural();
        let json = serde_json::to_string(&council.to_snapshot()).unwrap();
        let restored: Council = serde_json::from_str::<CouncilSnapshot>(&json).unwrap().into();
        assert_eq!(restored, council);
    }
}
