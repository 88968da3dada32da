//! Authority factory.

use std::sync::Arc;

use crate::error::{AuthorityError, Result};
use crate::providers::PdnsUtilAuthority;
use crate::traits::ZoneAuthority;
use crate::types::AuthorityConfig;

/// Creates a [`ZoneAuthority`] from configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_importer_authority::{create_authority, AuthorityConfig};
///
/// let authority = create_authority(&AuthorityConfig::default()).unwrap();
/// assert_eq!(authority.id(), "pdnsutil");
/// ```
pub fn create_authority(config: &AuthorityConfig) -> Result<Arc<dyn ZoneAuthority>> {
    if config.program.trim().is_empty() {
        return Err(AuthorityError::InvalidParameter {
            authority: PdnsUtilAuthority::NAME.to_string(),
            param: "program".to_string(),
            detail: "must not be empty".to_string(),
        });
    }
    if config.timeout_secs == 0 {
        return Err(AuthorityError::InvalidParameter {
            authority: PdnsUtilAuthority::NAME.to_string(),
            param: "timeout_secs".to_string(),
            detail: "must be greater than zero".to_string(),
        });
    }

    Ok(Arc::new(PdnsUtilAuthority::new(
        config.program.clone(),
        config.base_args.clone(),
        config.timeout(),
    )))
}
