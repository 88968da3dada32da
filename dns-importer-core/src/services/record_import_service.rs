//! Record import: decode → route → group → provision

use std::sync::Arc;

use crate::error::CoreResult;
use crate::pipeline::ZoneGroups;
use crate::services::{ProvisioningService, ServiceContext};
use crate::types::{DecodeFailure, ImportReport, RawRecord};

/// Record import service
pub struct RecordImportService {
    ctx: Arc<ServiceContext>,
    provisioning: ProvisioningService,
}

impl RecordImportService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let provisioning = ProvisioningService::new(Arc::clone(&ctx));
        Self { ctx, provisioning }
    }

    /// Decode and group a batch, setting aside records that fail to decode.
    pub fn prepare(&self, records: &[RawRecord]) -> (ZoneGroups, Vec<DecodeFailure>) {
        let decoder = self.ctx.decoder();
        let mut groups = ZoneGroups::new();
        let mut failures = Vec::new();

        for (i, raw) in records.iter().enumerate() {
            match decoder.decode(raw) {
                Ok(record) => groups.push(record),
                Err(e) => {
                    log::warn!(
                        "Skipping record #{} ({}): {e}",
                        i + 1,
                        raw.header.name
                    );
                    failures.push(DecodeFailure {
                        position: i + 1,
                        name: raw.header.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (groups, failures)
    }

    /// Import a batch of captured records into the zone authority.
    pub async fn import(&self, records: &[RawRecord]) -> CoreResult<ImportReport> {
        let (groups, decode_failures) = self.prepare(records);

        log::info!(
            "Decoded {} of {} records into {} zones",
            groups.record_count(),
            records.len(),
            groups.len()
        );

        let provision = self.provisioning.provision(&groups).await?;

        Ok(ImportReport {
            total_count: records.len(),
            decoded_count: groups.record_count(),
            decode_failures,
            provision,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::{create_test_context, raw_record, AuthorityCall};
    use crate::types::{DnsRecordType, ZoneStatus};

    #[tokio::test]
    async fn end_to_end_three_record_batch() {
        let (ctx, authority, _) = create_test_context();
        let svc = RecordImportService::new(ctx);
        let records = vec![
            raw_record("x.s1.example.com.", 1, json!({"A": "192.0.2.1"})),
            raw_record("y.s1.example.com.", 99, json!({"Foo": "bar"})),
            raw_record("z.s2.example.com.", 5, json!({"Target": "x.s1.example.com."})),
        ];

        let (groups, failures) = svc.prepare(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("s1.example.com.").unwrap().len(), 1);
        assert_eq!(groups.get("s2.example.com.").unwrap().len(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].position, 2);
        assert_eq!(failures[0].reason, "unknown record type 99");

        let report = svc.import(&records).await.unwrap();

        assert_eq!(report.total_count, 3);
        assert_eq!(report.decoded_count, 2);
        assert_eq!(report.decode_failures.len(), 1);
        assert_eq!(report.provision.success_count, 2);

        let calls = authority.calls().await;
        let creates = calls
            .iter()
            .filter(|c| matches!(c, AuthorityCall::CreateZone(_)))
            .count();
        assert_eq!(creates, 2);
        assert_eq!(
            authority.added_names().await,
            ["x.s1.example.com.", "z.s2.example.com."]
        );
        let cname = calls.iter().find_map(|c| match c {
            AuthorityCall::AddRecord(r) if r.record_type == DnsRecordType::Cname => Some(r),
            _ => None,
        });
        assert_eq!(cname.map(|r| r.content.as_str()), Some("x.s1.example.com."));
    }

    #[tokio::test]
    async fn rerun_against_existing_zones_still_provisions() {
        let (ctx, authority, _) = create_test_context();
        let svc = RecordImportService::new(ctx);
        let records = vec![raw_record("x.s1.example.com.", 1, json!({"A": "192.0.2.1"}))];

        let first = svc.import(&records).await.unwrap();
        let second = svc.import(&records).await.unwrap();

        assert_eq!(first.provision.zones[0].status, ZoneStatus::Created);
        assert_eq!(second.provision.zones[0].status, ZoneStatus::AlreadyExists);
        assert_eq!(second.provision.success_count, 1);
        assert_eq!(authority.added_names().await.len(), 2);
    }

    #[tokio::test]
    async fn undecodable_records_never_reach_authority() {
        let (ctx, authority, _) = create_test_context();
        let svc = RecordImportService::new(ctx);
        let records = vec![
            raw_record("a.s1.example.com.", 6, json!({})),
            raw_record("b.s1.example.com.", 15, json!({"Mx": "mail.x."})),
        ];

        let report = svc.import(&records).await.unwrap();

        assert_eq!(report.decode_failures.len(), 2);
        assert!(report.provision.zones.is_empty());
        assert!(authority.calls().await.is_empty());
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let (ctx, authority, _) = create_test_context();
        let report = RecordImportService::new(ctx).import(&[]).await.unwrap();
        assert_eq!(report, ImportReport::default());
        assert!(authority.calls().await.is_empty());
    }
}
