use async_trait::async_trait;

use crate::error::{AuthorityError, Result};
use crate::types::{CanonicalRecord, ZoneCreation};

/// Raw tool failure (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawCommandError {
    /// Exit code, `None` when killed by a signal.
    pub exit_code: Option<i32>,
    /// Combined stdout/stderr, trimmed.
    pub message: String,
}

impl RawCommandError {
    pub fn new(exit_code: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }
}

/// Extra information used while mapping errors (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record owner name (for conflict/duplicate errors).
    pub record_name: Option<String>,
    /// Zone name (for `ZoneNotFound`).
    pub zone: Option<String>,
}

/// Maps raw tool failures onto [`AuthorityError`] (internal).
pub(crate) trait AuthorityErrorMapper {
    /// Authority identifier.
    fn authority_name(&self) -> &'static str;

    /// Map a raw failure to the unified error type.
    fn map_error(&self, raw: RawCommandError, context: ErrorContext) -> AuthorityError;

    /// Fallback for unrecognised failures.
    fn rejected(&self, raw: RawCommandError) -> AuthorityError {
        AuthorityError::Rejected {
            authority: self.authority_name().to_string(),
            exit_code: raw.exit_code,
            raw_message: raw.message,
        }
    }
}

/// Zone-control capability of an authoritative DNS server.
///
/// Implementations must be safe to share across tasks; the importer itself
/// calls them sequentially.
#[async_trait]
pub trait ZoneAuthority: Send + Sync {
    /// Authority identifier, used in logs.
    fn id(&self) -> &'static str;

    /// Create `zone`.
    ///
    /// # Returns
    /// * `Ok(ZoneCreation::Created)` - the zone was created
    /// * `Ok(ZoneCreation::AlreadyExists)` - the zone was already present
    /// * `Err(_)` - any other failure; records must not be added to the zone
    async fn create_zone(&self, zone: &str) -> Result<ZoneCreation>;

    /// Add one record to `record.zone`.
    async fn add_record(&self, record: &CanonicalRecord) -> Result<()>;
}
