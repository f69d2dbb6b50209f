//! CoSA dashboard report.
//!
//! Loads a snapshot, labels it with the configured academic year, derives every
//! aggregate from it, and prints the requested page as JSON on stdout. Logs go
//! to stderr.
//!
//! Usage: cargo run --bin report [dashboard | council <SLUG> | club <SLUG> | finance]

use anyhow::{Context, bail};
use cosa_core::budget::HealthPolicy;
use cosa_core::dashboard::DashboardService;
use cosa_core::fixture::sample_snapshot;
use cosa_core::snapshot::Snapshot;
use cosa_shared::AppConfig;
use cosa_shared::types::{EntityId, Money};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Page selected on the command line.
enum Page {
    Dashboard,
    Council(EntityId),
    Club(EntityId),
    Finance,
}

impl Page {
    fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let page = match args.next().as_deref() {
            None | Some("dashboard") => Self::Dashboard,
            Some("finance") => Self::Finance,
            Some("council") => Self::Council(Self::slug(args.next(), "council")?),
            Some("club") => Self::Club(Self::slug(args.next(), "club")?),
            Some(other) => bail!("Unknown page {other}"),
        };
        Ok(page)
    }

    fn slug(arg: Option<String>, page: &str) -> anyhow::Result<EntityId> {
        arg.map(EntityId::from)
            .with_context(|| format!("Missing slug for {page} page"))
    }
}

fn load_snapshot(config: &AppConfig) -> anyhow::Result<Snapshot> {
    let Some(path) = &config.snapshot.path else {
        warn!("No snapshot path configured, using the sample organization");
        return Ok(Snapshot::without_records(sample_snapshot()));
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    Ok(Snapshot::from_json(&json)?)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let page = Page::from_args(std::env::args().skip(1))?;
    let config = AppConfig::load().context("Failed to load configuration")?;
    let policy = HealthPolicy::from_percent(config.dashboard.health_threshold_percent);
    let currency = config.dashboard.currency;

    let (organization, records) = load_snapshot(&config)?
        .with_academic_year(&config.dashboard.academic_year)
        .load()?;

    let json = match page {
        Page::Dashboard => {
            let view = DashboardService::build(&organization, &policy);
            info!(
                academic_year = %view.academic_year,
                allocated = %Money::new(view.overview.funds_allocated, currency),
                remaining = %Money::new(view.overview.remaining, currency),
                usage = %view.quick_stats.overall_usage_percent,
                "Dashboard ready"
            );
            serde_json::to_string_pretty(&view)?
        }
        Page::Council(id) => serde_json::to_string_pretty(&DashboardService::council_detail(
            &organization,
            &id,
            &policy,
        )?)?,
        Page::Club(id) => serde_json::to_string_pretty(&DashboardService::club_detail(
            &organization,
            &id,
            &policy,
            Some(&records),
            None,
        )?)?,
        Page::Finance => serde_json::to_string_pretty(&DashboardService::finance(&records))?,
    };

    println!("{json}");
    Ok(())
}
