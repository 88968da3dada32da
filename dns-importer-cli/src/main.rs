//! DNS importer entry point
//!
//! Loads registered subdomains into the SQLite store, then provisions captured
//! DNS records into PowerDNS through `pdnsutil`. The exit status only reflects
//! whether the run could be carried out; rejected records are logged and
//! counted in the summary printed to stdout.

mod config;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use config::ImporterConfig;
use dns_importer_app::adapters::SqliteStore;
use dns_importer_app::{AppStateBuilder, ImportSummary};
use dns_importer_authority::create_authority;
use dns_importer_core::{CoreError, ZoneRouter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = match ImporterConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match run(&config).await {
        Ok(s) => s,
        Err(e) => {
            if e.downcast_ref::<CoreError>().is_some_and(CoreError::is_expected) {
                tracing::warn!("Import failed: {e:#}");
            } else {
                tracing::error!("Import failed: {e:#}");
            }
            return ExitCode::FAILURE;
        }
    };

    let records = &summary.records;
    tracing::info!(
        "Import finished: {} subdomains inserted ({} already present, {} registered), {} of {} records decoded, {} added, {} failed, {} skipped",
        summary.subdomains.inserted_count,
        summary.subdomains.skipped_count,
        summary.registered_subdomains,
        records.decoded_count,
        records.total_count,
        records.provision.success_count,
        records.provision.failed_count,
        records.provision.skipped_count
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!("Failed to serialize summary: {e}"),
    }

    ExitCode::SUCCESS
}

async fn run(config: &ImporterConfig) -> anyhow::Result<ImportSummary> {
    let router = ZoneRouter::new(config.zone_labels)?;
    let zone_authority = create_authority(&config.authority)?;
    tracing::info!(
        "Zone authority: {} {}",
        config.authority.program,
        config.authority.base_args.join(" ")
    );

    let store = SqliteStore::new(&config.database_path)
        .await
        .with_context(|| format!("opening {}", config.database_path.display()))?;

    let state = AppStateBuilder::new()
        .zone_authority(zone_authority)
        .subdomain_repository(Arc::new(store))
        .router(router)
        .build()?;

    Ok(state.run_import(&config.sources()).await?)
}
