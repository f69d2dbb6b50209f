//! Snapshot seeder for CoSA development and testing.
//!
//! Writes the sample organization, with an empty record set, as a JSON
//! snapshot the report binary can read.
//!
//! Usage: cargo run --bin seeder [PATH]

use std::io::Write;

use anyhow::Context;
use cosa_core::fixture::sample_snapshot;
use cosa_core::snapshot::Snapshot;
use cosa_shared::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let json = Snapshot::without_records(sample_snapshot())
        .with_academic_year(&config.dashboard.academic_year)
        .to_json_pretty()?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("Failed to write snapshot to {path}"))?;
            info!(path = %path, "Snapshot written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
