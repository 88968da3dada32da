use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the subdomains file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdomainEntry {
    pub name: String,
}

/// A registered subdomain as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subdomain {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of loading a batch of subdomains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdomainImportResult {
    /// Names newly written to the store
    pub inserted_count: usize,
    /// Names that were already present (or repeated within the batch)
    pub skipped_count: usize,
}
