//! Sample budgets for development, demos, and tests.
//!
//! The proportions mirror how a typical club spends through the year:
//! a third of the allocation spent, a further share booked, and some
//! external sponsorship on top.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::budget::{BudgetData, BudgetRow};
use crate::hierarchy::{
    Club, CouncilSnapshot, CouncilType, HierarchyError, Organization, OrganizationSnapshot,
};

/// Builds a budget for one entity from its total allocation.
///
/// Particulars take 60% of the allocation and equipment 40%; `total` is their sum.
#[must_use]
pub fn budget_for(allocated: Decimal) -> BudgetData {
    BudgetData::from_categories(
        BudgetRow::new(
            allocated * dec!(0.6),
            allocated * dec!(0.2),
            allocated * dec!(0.1),
            allocated * dec!(0.1),
        ),
        BudgetRow::new(
            allocated * dec!(0.4),
            allocated * dec!(0.15),
            allocated * dec!(0.05),
            allocated * dec!(0.05),
        ),
    )
}

fn clubs(entries: &[(&str, &str, i64)]) -> Vec<Club> {
    entries
        .iter()
        .map(|&(id, name, allocated)| Club::new(id, name, budget_for(Decimal::from(allocated))))
        .collect()
}

/// The sample organization snapshot: four councils, three independent clubs, and misc.
#[must_use]
pub fn sample_snapshot() -> OrganizationSnapshot {
    let cultural = clubs(&[
        ("beatbackers", "Beatbackers", 50_000),
        ("gols", "General Oratory and Literary Society", 45_000),
        ("drishya", "Drishya", 60_000),
        ("fps", "Film Production Society", 70_000),
        ("pixel", "The Pixel Snappers", 40_000),
        ("renaissance", "Renaissance", 55_000),
        ("quizzotica", "Quizzotica", 35_000),
        ("swara", "Swara", 50_000),
        ("designx", "DesignX", 45_000),
    ]);

    let scitech = clubs(&[
        ("space", "Space Exploration", 80_000),
        ("misc-sci", "MiSc Society", 40_000),
        ("epsilon", "Epsilon", 65_000),
        ("spectre", "Spectre", 70_000),
        ("bib", "BIB", 55_000),
        ("ingenuity", "Ingenuity", 60_000),
        ("electromos", "Electromos", 75_000),
        ("motorsports", "Motorsports", 100_000),
        ("dsai", "Data Science and AI", 70_000),
        ("openlake", "OpenLake", 50_000),
        ("gdg", "GDG", 45_000),
    ]);

    let sports = clubs(&[
        ("cricket", "Cricket", 90_000),
        ("basketball", "Basketball", 70_000),
        ("tabletennis", "Table Tennis", 50_000),
        ("football", "Football", 85_000),
        ("badminton", "Badminton", 60_000),
        ("volleyball", "Volleyball", 55_000),
        ("athletics", "Athletics", 75_000),
        ("chess", "Chess", 30_000),
        ("gym", "Gym", 120_000),
        ("yoga", "Yoga and Recreational", 40_000),
        ("sports-misc", "Misc", 35_000),
    ]);

    let meraz = clubs(&[
        ("decor", "Decor", 150_000),
        ("outreach", "Outreach", 80_000),
        ("flashmob", "Flashmob", 50_000),
        ("pronites", "Pronites", 300_000),
        ("meraz-misc", "Misc", 70_000),
    ]);

    let council = |id: &str, name: &str, council_type, clubs| CouncilSnapshot {
        id: id.into(),
        name: name.to_string(),
        council_type,
        clubs,
    };

    OrganizationSnapshot {
        name: "Council of Student Affairs".to_string(),
        academic_year: "2025-26".to_string(),
        councils: vec![
            council("cultural", "Cultural Council", CouncilType::Cultural, cultural),
            council("scitech", "SciTech Council", CouncilType::Scitech, scitech),
            council("sports", "Sports Council", CouncilType::Sports, sports),
            council("meraz", "Meraz", CouncilType::Cultural, meraz),
        ],
        independent_clubs: clubs(&[
            ("fintech", "Fintech Society", 80_000),
            ("ecell", "E-Cell", 90_000),
            ("nirvana", "Nirvana", 70_000),
        ]),
        misc: budget_for(dec!(100000)),
    }
}

/// The sample organization with every derived budget computed.
pub fn sample_organization() -> Result<Organization, HierarchyError> {
    Organization::from_snapshot(sample_snapshot())
}
