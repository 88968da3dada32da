use serde::{Deserialize, Serialize};

/// Unified error type for all zone authority operations.
///
/// Each variant includes an `authority` field identifying the backend that
/// produced the error, plus variant-specific context.
///
/// # Fatal vs. per-item errors
///
/// [`Unavailable`](Self::Unavailable) means the tool could not be started at
/// all; every other variant describes the failure of a single invocation and
/// should be handled per zone or per record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum AuthorityError {
    /// The zone-control tool could not be launched (missing binary, permissions, ...).
    Unavailable {
        /// Authority that produced the error.
        authority: String,
        /// Error details.
        detail: String,
    },

    /// The invocation did not finish within the configured timeout.
    Timeout {
        /// Authority that produced the error.
        authority: String,
        /// Subcommand that timed out (`create-zone`, `add-record`).
        operation: String,
        /// Timeout that was exceeded, in seconds.
        timeout_secs: u64,
    },

    /// The target zone does not exist on the authority.
    ZoneNotFound {
        /// Authority that produced the error.
        authority: String,
        /// Zone name.
        zone: String,
        /// Original tool output, if available.
        raw_message: Option<String>,
    },

    /// The record conflicts with an existing RRset (e.g. CNAME next to other data).
    RecordConflict {
        /// Authority that produced the error.
        authority: String,
        /// Owner name of the rejected record.
        record_name: String,
        /// Original tool output, if available.
        raw_message: Option<String>,
    },

    /// An identical record is already present.
    DuplicateRecord {
        /// Authority that produced the error.
        authority: String,
        /// Owner name of the rejected record.
        record_name: String,
        /// Original tool output, if available.
        raw_message: Option<String>,
    },

    /// A configuration value is unusable.
    InvalidParameter {
        /// Authority that produced the error.
        authority: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The tool exited unsuccessfully for a reason not mapped above.
    Rejected {
        /// Authority that produced the error.
        authority: String,
        /// Process exit code, if the process exited normally.
        exit_code: Option<i32>,
        /// Combined stdout/stderr of the tool.
        raw_message: String,
    },
}

impl AuthorityError {
    /// Whether the error is a normal rejection by the tool (bad content,
    /// conflicts) rather than an infrastructure problem.
    ///
    /// Returning `true` means log at `warn`, `false` at `error`.
    /// **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound { .. }
                | Self::RecordConflict { .. }
                | Self::DuplicateRecord { .. }
                | Self::Rejected { .. }
        )
    }

    /// Whether the error means the authority cannot be used for the rest of the run.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl std::fmt::Display for AuthorityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { authority, detail } => {
                write!(f, "[{authority}] Tool unavailable: {detail}")
            }
            Self::Timeout {
                authority,
                operation,
                timeout_secs,
            } => {
                write!(f, "[{authority}] {operation} timed out after {timeout_secs}s")
            }
            Self::ZoneNotFound {
                authority,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{authority}] Zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "[{authority}] Zone '{zone}' not found")
                }
            }
            Self::RecordConflict {
                authority,
                record_name,
                ..
            } => {
                write!(
                    f,
                    "[{authority}] Record '{record_name}' conflicts with a pre-existing RRset"
                )
            }
            Self::DuplicateRecord {
                authority,
                record_name,
                ..
            } => {
                write!(f, "[{authority}] Record '{record_name}' already exists")
            }
            Self::InvalidParameter {
                authority,
                param,
                detail,
            } => {
                write!(f, "[{authority}] Invalid parameter '{param}': {detail}")
            }
            Self::Rejected {
                authority,
                exit_code,
                raw_message,
            } => match exit_code {
                Some(code) => write!(f, "[{authority}] Exit status {code}: {raw_message}"),
                None => write!(f, "[{authority}] Terminated by signal: {raw_message}"),
            },
        }
    }
}

impl std::error::Error for AuthorityError {}

/// Convenience type alias for `Result<T, AuthorityError>`.
pub type Result<T> = std::result::Result<T, AuthorityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unavailable() {
        let e = AuthorityError::Unavailable {
            authority: "pdnsutil".to_string(),
            detail: "No such file or directory".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[pdnsutil] Tool unavailable: No such file or directory"
        );
    }

    #[test]
    fn display_timeout() {
        let e = AuthorityError::Timeout {
            authority: "pdnsutil".to_string(),
            operation: "add-record".to_string(),
            timeout_secs: 30,
        };
        assert_eq!(e.to_string(), "[pdnsutil] add-record timed out after 30s");
    }

    #[test]
    fn display_zone_not_found_with_and_without_message() {
        let with = AuthorityError::ZoneNotFound {
            authority: "pdnsutil".to_string(),
            zone: "s1.example.com.".to_string(),
            raw_message: Some("No such zone in the database".to_string()),
        };
        assert_eq!(
            with.to_string(),
            "[pdnsutil] Zone 's1.example.com.' not found: No such zone in the database"
        );

        let without = AuthorityError::ZoneNotFound {
            authority: "pdnsutil".to_string(),
            zone: "s1.example.com.".to_string(),
            raw_message: None,
        };
        assert_eq!(
            without.to_string(),
            "[pdnsutil] Zone 's1.example.com.' not found"
        );
    }

    #[test]
    fn display_rejected_signal() {
        let e = AuthorityError::Rejected {
            authority: "pdnsutil".to_string(),
            exit_code: None,
            raw_message: String::new(),
        };
        assert_eq!(e.to_string(), "[pdnsutil] Terminated by signal: ");
    }

    #[test]
    fn expected_and_fatal_classification() {
        let unavailable = AuthorityError::Unavailable {
            authority: "pdnsutil".to_string(),
            detail: "missing".to_string(),
        };
        assert!(unavailable.is_fatal());
        assert!(!unavailable.is_expected());

        let timeout = AuthorityError::Timeout {
            authority: "pdnsutil".to_string(),
            operation: "create-zone".to_string(),
            timeout_secs: 1,
        };
        assert!(!timeout.is_fatal());
        assert!(!timeout.is_expected());

        let duplicate = AuthorityError::DuplicateRecord {
            authority: "pdnsutil".to_string(),
            record_name: "a.s1.example.com.".to_string(),
            raw_message: None,
        };
        assert!(duplicate.is_expected());
        assert!(!duplicate.is_fatal());
    }
}
