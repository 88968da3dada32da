use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record types the importer knows how to provision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// Name server record.
    Ns,
    /// Canonical name (alias) record.
    Cname,
    /// Text record.
    Txt,
    /// IPv6 address record.
    Aaaa,
    /// Mail exchange record.
    Mx,
}

impl DnsRecordType {
    /// Mnemonic as passed to the zone-control tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Aaaa => "AAAA",
            Self::Mx => "MX",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully decoded record, ready to hand to a [`ZoneAuthority`](crate::ZoneAuthority).
///
/// `content` is already in the tool's presentation format (TXT quoted,
/// MX as `"<preference> <exchange>"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Fully-qualified, dot-terminated owner name.
    pub name: String,
    /// Owning zone, derived from `name`.
    pub zone: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// TTL in seconds.
    pub ttl: u32,
    /// Type-specific content string.
    pub content: String,
}

impl std::fmt::Display for CanonicalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} IN {} {} (zone {})",
            self.name, self.ttl, self.record_type, self.content, self.zone
        )
    }
}

// ============ Zone Creation ============

/// Outcome of a successful `create-zone` call.
///
/// Failures are reported through [`AuthorityError`](crate::AuthorityError),
/// so a caller only proceeds with record provisioning on one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ZoneCreation {
    /// The zone did not exist and was created.
    Created,
    /// The authority already had the zone.
    AlreadyExists,
}

// ============ Configuration ============

/// How to invoke the zone-control tool.
///
/// The tool is run as `<program> <base_args...> <subcommand> <args...>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct AuthorityConfig {
    /// Executable name or path.
    pub program: String,
    /// Arguments placed before every subcommand.
    pub base_args: Vec<String>,
    /// Upper bound for a single invocation, in seconds.
    pub timeout_secs: u64,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            program: "pdnsutil".to_string(),
            base_args: vec!["--config-dir=.".to_string()],
            timeout_secs: 30,
        }
    }
}

impl AuthorityConfig {
    /// Per-invocation timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
