//! Application bootstrap for the DNS importer.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter
//! injection) and the import run that ties the input files to the core
//! services.

pub mod adapters;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use dns_importer_core::error::{CoreError, CoreResult};
use dns_importer_core::services::{RecordImportService, ServiceContext, SubdomainService};
use dns_importer_core::traits::{SubdomainRepository, ZoneAuthority};
use dns_importer_core::types::{ImportReport, SubdomainImportResult};
use dns_importer_core::utils::{parse_record_lines, parse_subdomain_lines};
use dns_importer_core::ZoneRouter;

/// Input files of one import run.
#[derive(Debug, Clone)]
pub struct ImportSources {
    /// Captured records, one JSON envelope per line
    pub records_path: PathBuf,
    /// Registered subdomains, one JSON object per line
    pub subdomains_path: PathBuf,
}

/// Outcome of one import run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub subdomains: SubdomainImportResult,
    /// Subdomains registered in the store after loading
    pub registered_subdomains: usize,
    pub records: ImportReport,
}

/// Application state.
///
/// Holds the `ServiceContext` and the services built on it.
pub struct AppState {
    /// Service context (holds the store and the zone authority)
    pub ctx: Arc<ServiceContext>,
    /// Subdomain loader
    pub subdomain_service: SubdomainService,
    /// Record import pipeline
    pub record_import_service: RecordImportService,
}

impl AppState {
    /// Run a full import: load subdomains, then provision records.
    ///
    /// Both input files are read and parsed before anything is written, so a
    /// malformed line fails the run without side effects.
    ///
    /// # Errors
    /// Fails on unreadable or malformed input, storage errors, and when the
    /// zone authority cannot be launched. Individual record failures are
    /// reported in the summary instead.
    pub async fn run_import(&self, sources: &ImportSources) -> CoreResult<ImportSummary> {
        let subdomain_file = read_input(&sources.subdomains_path).await?;
        let entries = parse_subdomain_lines(&display_name(&sources.subdomains_path), &subdomain_file)?;

        let records_file = read_input(&sources.records_path).await?;
        let records = parse_record_lines(&display_name(&sources.records_path), &records_file)?;

        log::info!(
            "Loaded {} subdomains and {} captured records",
            entries.len(),
            records.len()
        );

        let subdomains = self.subdomain_service.import(&entries).await?;
        let registered_subdomains = self.subdomain_service.list().await?.len();
        log::info!("{registered_subdomains} subdomains registered");

        let records = self.record_import_service.import(&records).await?;

        Ok(ImportSummary {
            subdomains,
            registered_subdomains,
            records,
        })
    }
}

async fn read_input(path: &Path) -> CoreResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CoreError::InputRead {
            file: display_name(path),
            detail: e.to_string(),
        })
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

/// Builder for constructing `AppState` with concrete adapters.
///
/// # Required adapters
/// - `zone_authority`: the zone-control tool
/// - `subdomain_repository`: where subdomains are stored
///
/// # Optional
/// - `router`: defaults to `ZoneRouter::default()`
pub struct AppStateBuilder {
    zone_authority: Option<Arc<dyn ZoneAuthority>>,
    subdomain_repository: Option<Arc<dyn SubdomainRepository>>,
    router: Option<ZoneRouter>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            zone_authority: None,
            subdomain_repository: None,
            router: None,
        }
    }

    #[must_use]
    pub fn zone_authority(mut self, authority: Arc<dyn ZoneAuthority>) -> Self {
        self.zone_authority = Some(authority);
        self
    }

    #[must_use]
    pub fn subdomain_repository(mut self, repo: Arc<dyn SubdomainRepository>) -> Self {
        self.subdomain_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn router(mut self, router: ZoneRouter) -> Self {
        self.router = Some(router);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let zone_authority = self.zone_authority.ok_or_else(|| {
            CoreError::ValidationError("zone_authority is required".to_string())
        })?;
        let subdomain_repository = self.subdomain_repository.ok_or_else(|| {
            CoreError::ValidationError("subdomain_repository is required".to_string())
        })?;
        let router = self.router.unwrap_or_default();

        let ctx = Arc::new(ServiceContext::new(
            zone_authority,
            subdomain_repository,
            router,
        ));

        Ok(AppState {
            subdomain_service: SubdomainService::new(Arc::clone(&ctx)),
            record_import_service: RecordImportService::new(Arc::clone(&ctx)),
            ctx,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
