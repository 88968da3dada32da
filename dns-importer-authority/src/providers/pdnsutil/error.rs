//! pdnsutil error mapping

use crate::error::AuthorityError;
use crate::traits::{AuthorityErrorMapper, ErrorContext, RawCommandError};

use super::PdnsUtilAuthority;

/// `create-zone` on an existing zone prints `Zone '<name>' exists already`
/// and exits 1. Older wording `already exists` is accepted too.
pub(super) fn is_zone_exists(message: &str) -> bool {
    message.contains("exists already") || message.contains("already exists")
}

/// pdnsutil reports failures only as text, so mapping is by message fragment.
impl AuthorityErrorMapper for PdnsUtilAuthority {
    fn authority_name(&self) -> &'static str {
        Self::NAME
    }

    fn map_error(&self, raw: RawCommandError, context: ErrorContext) -> AuthorityError {
        let message = raw.message.as_str();

        // RRset test.pear5.messwithdns.com. IN CNAME: Conflicts with pre-existing RRset
        if message.contains("Conflicts with pre-existing RRset")
            || message.contains("has more than one record")
        {
            return AuthorityError::RecordConflict {
                authority: self.authority_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            };
        }

        // Duplicate record in RRset test.pear5.messwithdns.com. IN A with content "1.2.3.5"
        if message.contains("Duplicate record in RRset") {
            return AuthorityError::DuplicateRecord {
                authority: self.authority_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            };
        }

        // No such zone in the database / Zone 'x.' not found
        if message.contains("No such zone") || message.contains("not found") {
            if let Some(zone) = context.zone {
                return AuthorityError::ZoneNotFound {
                    authority: self.authority_name().to_string(),
                    zone,
                    raw_message: Some(raw.message),
                };
            }
        }

        self.rejected(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn authority() -> PdnsUtilAuthority {
        PdnsUtilAuthority::new("pdnsutil".to_string(), Vec::new(), Duration::from_secs(1))
    }

    fn record_context() -> ErrorContext {
        ErrorContext {
            record_name: Some("test.pear5.example.com.".to_string()),
            zone: Some("pear5.example.com.".to_string()),
        }
    }

    #[test]
    fn detects_existing_zone() {
        assert!(is_zone_exists("Zone 'pear5.example.com.' exists already"));
        assert!(is_zone_exists("Zone 'pear5.example.com.' already exists"));
        assert!(!is_zone_exists("Error: permission denied"));
    }

    #[test]
    fn maps_cname_conflict() {
        let raw = RawCommandError::new(
            Some(1),
            "RRset test.pear5.example.com. IN CNAME: Conflicts with pre-existing RRset",
        );
        let err = authority().map_error(raw, record_context());
        assert!(matches!(
            err,
            AuthorityError::RecordConflict { ref record_name, .. }
                if record_name == "test.pear5.example.com."
        ));
    }

    #[test]
    fn maps_duplicate_record() {
        let raw = RawCommandError::new(
            Some(1),
            "Duplicate record in RRset test.pear5.example.com. IN A with content \"1.2.3.5\"",
        );
        let err = authority().map_error(raw, record_context());
        assert!(matches!(err, AuthorityError::DuplicateRecord { .. }));
    }

    #[test]
    fn maps_missing_zone() {
        let raw = RawCommandError::new(Some(1), "No such zone in the database");
        let err = authority().map_error(raw, record_context());
        assert!(matches!(
            err,
            AuthorityError::ZoneNotFound { ref zone, .. } if zone == "pear5.example.com."
        ));
    }

    #[test]
    fn falls_back_to_rejected() {
        let raw = RawCommandError::new(Some(1), "Parsing record content: bad IPv4");
        let err = authority().map_error(raw, record_context());
        assert_eq!(
            err,
            AuthorityError::Rejected {
                authority: "pdnsutil".to_string(),
                exit_code: Some(1),
                raw_message: "Parsing record content: bad IPv4".to_string(),
            }
        );
    }
}
