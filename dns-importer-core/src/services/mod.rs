//! Business logic service layer

mod provisioning_service;
mod record_import_service;
mod subdomain_service;

pub use provisioning_service::ProvisioningService;
pub use record_import_service::RecordImportService;
pub use subdomain_service::SubdomainService;

use std::sync::Arc;

use crate::pipeline::{RecordDecoder, ZoneRouter};
use crate::traits::{SubdomainRepository, ZoneAuthority};

/// Service context - holds all dependencies
///
/// The platform layer creates this once and injects the concrete store and
/// zone authority.
pub struct ServiceContext {
    /// Zone-control capability
    zone_authority: Arc<dyn ZoneAuthority>,
    /// Subdomain persistence
    subdomain_repository: Arc<dyn SubdomainRepository>,
    /// Zone ownership rule
    router: ZoneRouter,
}

impl ServiceContext {
    #[must_use]
    pub fn new(
        zone_authority: Arc<dyn ZoneAuthority>,
        subdomain_repository: Arc<dyn SubdomainRepository>,
        router: ZoneRouter,
    ) -> Self {
        Self {
            zone_authority,
            subdomain_repository,
            router,
        }
    }

    pub fn zone_authority(&self) -> &Arc<dyn ZoneAuthority> {
        &self.zone_authority
    }

    pub fn subdomain_repository(&self) -> &Arc<dyn SubdomainRepository> {
        &self.subdomain_repository
    }

    pub fn router(&self) -> ZoneRouter {
        self.router
    }

    /// Decoder bound to this context's router.
    pub fn decoder(&self) -> RecordDecoder {
        RecordDecoder::new(self.router)
    }
}
