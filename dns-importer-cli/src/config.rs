//! Configuration management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dns_importer_app::ImportSources;
use dns_importer_authority::AuthorityConfig;
use dns_importer_core::pipeline::DEFAULT_ZONE_LABELS;
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DNS_IMPORTER_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dns-importer.toml";

/// Importer configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Captured records file.
    pub records_path: PathBuf,

    /// Registered subdomains file.
    pub subdomains_path: PathBuf,

    /// SQLite database holding the `subdomains` table.
    pub database_path: PathBuf,

    /// Trailing labels that make up a zone name.
    pub zone_labels: usize,

    /// Zone-control tool invocation.
    pub authority: AuthorityConfig,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from("dns_records.json"),
            subdomains_path: PathBuf::from("subdomains.json"),
            database_path: PathBuf::from("sqlite/users.sqlite"),
            zone_labels: DEFAULT_ZONE_LABELS,
            authority: AuthorityConfig::default(),
        }
    }
}

impl ImporterConfig {
    /// Load configuration from `$DNS_IMPORTER_CONFIG`, else `./dns-importer.toml`,
    /// else the defaults.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match resolve_path(explicit, Path::new(DEFAULT_CONFIG_FILE)) {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML configuration.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.zone_labels == 0 {
            anyhow::bail!("zone_labels must be at least 1");
        }
        if self.authority.program.trim().is_empty() {
            anyhow::bail!("authority.program must not be empty");
        }
        if self.authority.timeout_secs == 0 {
            anyhow::bail!("authority.timeout_secs must be greater than zero");
        }
        for (key, path) in [
            ("records_path", &self.records_path),
            ("subdomains_path", &self.subdomains_path),
            ("database_path", &self.database_path),
        ] {
            if path.as_os_str().is_empty() {
                anyhow::bail!("{key} must not be empty");
            }
        }
        Ok(())
    }

    pub fn sources(&self) -> ImportSources {
        ImportSources {
            records_path: self.records_path.clone(),
            subdomains_path: self.subdomains_path.clone(),
        }
    }
}

/// An explicit path always wins, even if the file is missing (reading it then
/// fails). Otherwise `fallback` is used only when it exists.
fn resolve_path(explicit: Option<PathBuf>, fallback: &Path) -> Option<PathBuf> {
    explicit.or_else(|| fallback.exists().then(|| fallback.to_path_buf()))
}
