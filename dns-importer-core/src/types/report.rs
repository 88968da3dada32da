//! Import run reports

use serde::{Deserialize, Serialize};

/// A record that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeFailure {
    /// 1-based position of the record in the batch
    pub position: usize,
    /// Owner name from the record header
    pub name: String,
    /// Failure reason
    pub reason: String,
}

/// What happened when a zone was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneStatus {
    Created,
    AlreadyExists,
    /// Creation failed; none of the zone's records were attempted
    Failed,
}

/// Per-zone outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOutcome {
    pub zone: String,
    pub status: ZoneStatus,
    /// Number of records grouped under the zone
    pub record_count: usize,
    /// Creation error, when `status` is `Failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A record the authority refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFailure {
    pub zone: String,
    /// Presentation form of the record
    pub record: String,
    pub reason: String,
}

/// Result of provisioning a set of zone groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionResult {
    pub zones: Vec<ZoneOutcome>,
    /// Records added
    pub success_count: usize,
    /// Records the authority rejected
    pub failed_count: usize,
    /// Records not attempted because their zone could not be created
    pub skipped_count: usize,
    pub failures: Vec<RecordFailure>,
}

/// Result of a full record import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Records read from the input
    pub total_count: usize,
    /// Records that decoded successfully
    pub decoded_count: usize,
    pub decode_failures: Vec<DecodeFailure>,
    pub provision: ProvisionResult,
}
