//! Zone ownership from record names.

use crate::error::{CoreError, CoreResult};

/// Trailing labels that make up a zone name, counting the empty label after
/// the final dot: `sub.example.com.` is four labels.
pub const DEFAULT_ZONE_LABELS: usize = 4;

/// Derives the owning zone of a record name by keeping its last
/// `zone_labels` dot-separated labels.
///
/// Names with fewer labels than that route to themselves unchanged; nothing
/// is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRouter {
    zone_labels: usize,
}

impl ZoneRouter {
    /// Create a router keeping `zone_labels` trailing labels.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if `zone_labels` is zero.
    pub fn new(zone_labels: usize) -> CoreResult<Self> {
        if zone_labels == 0 {
            return Err(CoreError::ValidationError(
                "zone_labels must be at least 1".to_string(),
            ));
        }
        Ok(Self { zone_labels })
    }

    pub fn zone_labels(&self) -> usize {
        self.zone_labels
    }

    /// Owning zone of `name`.
    pub fn zone_of(&self, name: &str) -> String {
        let labels: Vec<&str> = name.split('.').collect();
        let start = labels.len().saturating_sub(self.zone_labels);
        labels[start..].join(".")
    }
}

impl Default for ZoneRouter {
    fn default() -> Self {
        Self {
            zone_labels: DEFAULT_ZONE_LABELS,
        }
    }
}
