//! Zone and record provisioning through the zone authority

use std::sync::Arc;

use dns_importer_authority::AuthorityError;

use crate::error::{CoreError, CoreResult};
use crate::pipeline::{ZoneGroup, ZoneGroups};
use crate::services::ServiceContext;
use crate::types::{ProvisionResult, RecordFailure, ZoneCreation, ZoneOutcome, ZoneStatus};

/// Provisioning executor
///
/// For every zone: create it, then add its records one by one. A record
/// failure never stops the zone or the batch; a zone whose creation failed
/// (other than "already exists") has none of its records attempted.
pub struct ProvisioningService {
    ctx: Arc<ServiceContext>,
}

impl ProvisioningService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Provision every zone group.
    ///
    /// # Errors
    /// Only when the authority tool cannot be launched at all
    /// (`CoreError::Authority` wrapping `AuthorityError::Unavailable`).
    pub async fn provision(&self, groups: &ZoneGroups) -> CoreResult<ProvisionResult> {
        let mut result = ProvisionResult::default();

        for group in groups {
            self.provision_zone(group, &mut result).await?;
        }

        log::info!(
            "Provisioning complete: {} zones, {} records added, {} failed, {} skipped",
            result.zones.len(),
            result.success_count,
            result.failed_count,
            result.skipped_count
        );
        Ok(result)
    }

    async fn provision_zone(
        &self,
        group: &ZoneGroup,
        result: &mut ProvisionResult,
    ) -> CoreResult<()> {
        let authority = self.ctx.zone_authority();
        let record_count = group.records.len();

        let status = match authority.create_zone(&group.zone).await {
            Ok(ZoneCreation::Created) => {
                log::info!("Created zone {} ({record_count} records)", group.zone);
                ZoneStatus::Created
            }
            Ok(ZoneCreation::AlreadyExists) => {
                log::info!(
                    "Zone {} already exists, adding {record_count} records",
                    group.zone
                );
                ZoneStatus::AlreadyExists
            }
            Err(e) if e.is_fatal() => return Err(CoreError::Authority(e)),
            Err(e) => {
                log::error!(
                    "Failed to create zone {}, skipping {record_count} records: {e}",
                    group.zone
                );
                result.zones.push(ZoneOutcome {
                    zone: group.zone.clone(),
                    status: ZoneStatus::Failed,
                    record_count,
                    error: Some(e.to_string()),
                });
                result.skipped_count += record_count;
                return Ok(());
            }
        };

        result.zones.push(ZoneOutcome {
            zone: group.zone.clone(),
            status,
            record_count,
            error: None,
        });

        for record in &group.records {
            match authority.add_record(record).await {
                Ok(()) => result.success_count += 1,
                Err(e) if e.is_fatal() => return Err(CoreError::Authority(e)),
                Err(e) => {
                    log_record_failure(&record.to_string(), &e);
                    result.failed_count += 1;
                    result.failures.push(RecordFailure {
                        zone: group.zone.clone(),
                        record: record.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn log_record_failure(record: &str, e: &AuthorityError) {
    if e.is_expected() {
        log::warn!("Failed to add record: {record}: {e}");
    } else {
        log::error!("Failed to add record: {record}: {e}");
    }
}
