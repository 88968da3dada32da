//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use dns_importer_authority::DnsRecordType;

// Re-export library error type
pub use dns_importer_authority::AuthorityError;

/// Per-record decoding failure.
///
/// Never fatal: the record is logged, reported and left out of every zone group.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DecodeError {
    /// Type code outside the supported set
    #[error("unknown record type {0}")]
    UnknownRecordType(u16),

    /// Supported type, but a field its content needs is absent
    #[error("{record_type} record is missing field '{field}'")]
    MissingField {
        record_type: DnsRecordType,
        field: &'static str,
    },

    /// Supported type, but a field has the wrong shape
    #[error("{record_type} record has malformed field '{field}': {detail}")]
    MalformedField {
        record_type: DnsRecordType,
        field: &'static str,
        detail: String,
    },
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// An input file could not be read
    #[error("Failed to read {file}: {detail}")]
    InputRead { file: String, detail: String },

    /// An input file contains a malformed line
    #[error("Malformed input in {file} at line {line}: {detail}")]
    InputParse {
        file: String,
        line: usize,
        detail: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Zone authority error that stops the run
    #[error("{0}")]
    Authority(#[from] AuthorityError),
}

impl CoreError {
    /// Whether it is caused by the run's inputs rather than its environment.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InputRead { .. } | Self::InputParse { .. } | Self::ValidationError(_) => true,
            Self::Authority(e) => e.is_expected(),
            Self::StorageError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
