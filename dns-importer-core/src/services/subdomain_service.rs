//! Subdomain registration loading

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Subdomain, SubdomainEntry, SubdomainImportResult};

/// Subdomain loader
pub struct SubdomainService {
    ctx: Arc<ServiceContext>,
}

impl SubdomainService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List registered subdomains
    pub async fn list(&self) -> CoreResult<Vec<Subdomain>> {
        self.ctx.subdomain_repository().find_all().await
    }

    /// Insert every entry's name into the store as one batch.
    ///
    /// Names are stored verbatim. Blank names are rejected before anything
    /// is written.
    pub async fn import(&self, entries: &[SubdomainEntry]) -> CoreResult<SubdomainImportResult> {
        if let Some(pos) = entries.iter().position(|e| e.name.trim().is_empty()) {
            return Err(CoreError::ValidationError(format!(
                "subdomain entry #{} has an empty name",
                pos + 1
            )));
        }

        let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        let inserted_count = self
            .ctx
            .subdomain_repository()
            .insert_all(&names)
            .await?;

        let result = SubdomainImportResult {
            inserted_count,
            skipped_count: names.len() - inserted_count,
        };
        log::info!(
            "Subdomains loaded: {} inserted, {} already present",
            result.inserted_count,
            result.skipped_count
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    fn entries(names: &[&str]) -> Vec<SubdomainEntry> {
        names
            .iter()
            .map(|n| SubdomainEntry {
                name: (*n).to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn inserts_all_names() {
        let (ctx, _, repo) = create_test_context();
        let svc = SubdomainService::new(ctx);

        let result = svc.import(&entries(&["oyster267", "pear5"])).await.unwrap();

        assert_eq!(result.inserted_count, 2);
        assert_eq!(result.skipped_count, 0);
        assert_eq!(repo.names().await, ["oyster267", "pear5"]);
    }

    #[tokio::test]
    async fn existing_names_are_skipped() {
        let (ctx, _, _) = create_test_context();
        let svc = SubdomainService::new(ctx);
        svc.import(&entries(&["oyster267"])).await.unwrap();

        let result = svc
            .import(&entries(&["oyster267", "pear5", "pear5"]))
            .await
            .unwrap();

        assert_eq!(result.inserted_count, 1);
        assert_eq!(result.skipped_count, 2);
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn blank_name_rejected_before_writing() {
        let (ctx, _, repo) = create_test_context();
        let svc = SubdomainService::new(ctx);

        let err = svc
            .import(&entries(&["oyster267", "  "]))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(repo.names().await.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_keeps_nothing() {
        let (ctx, _, repo) = create_test_context();
        repo.set_insert_error(Some("disk full".to_string())).await;
        let svc = SubdomainService::new(ctx);

        let err = svc.import(&entries(&["oyster267"])).await.unwrap_err();

        assert!(matches!(err, CoreError::StorageError(_)));
        assert!(repo.names().await.is_empty());
    }
}
