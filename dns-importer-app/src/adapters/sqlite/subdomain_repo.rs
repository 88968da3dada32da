//! `SubdomainRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::{ActiveValue::Set, EntityTrait, QueryOrder, TransactionTrait};

use dns_importer_core::error::{CoreError, CoreResult};
use dns_importer_core::traits::SubdomainRepository;
use dns_importer_core::types::Subdomain;

use super::SqliteStore;
use super::entity::subdomain;

/// Format of SQLite's `CURRENT_TIMESTAMP`.
const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

impl subdomain::Model {
    /// Convert a `SeaORM` row model into a domain `Subdomain`.
    ///
    /// Rows written by the importer carry RFC 3339 timestamps; rows written by
    /// other tools get the column default (`YYYY-MM-DD HH:MM:SS`, UTC).
    fn into_subdomain(self) -> CoreResult<Subdomain> {
        let created_at = parse_timestamp(&self.created_at)?;

        Ok(Subdomain {
            name: self.name,
            created_at,
        })
    }
}

fn parse_timestamp(value: &str) -> CoreResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, SQLITE_TIMESTAMP)
        .map(|ts| ts.and_utc())
        .map_err(|e| CoreError::StorageError(format!("Invalid created_at '{value}': {e}")))
}

#[async_trait]
impl SubdomainRepository for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Subdomain>> {
        let rows = subdomain::Entity::find()
            .order_by_asc(subdomain::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query subdomains: {e}")))?;

        rows.into_iter()
            .map(subdomain::Model::into_subdomain)
            .collect()
    }

    async fn insert_all(&self, names: &[String]) -> CoreResult<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to begin transaction: {e}")))?;

        let created_at = Utc::now().to_rfc3339();
        let mut inserted = 0;

        // An early return drops `txn`, which rolls the batch back.
        for name in names {
            let existing = subdomain::Entity::find_by_id(name.as_str())
                .one(&txn)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to query subdomain: {e}")))?;
            if existing.is_some() {
                log::debug!("Subdomain {name} already registered, skipping");
                continue;
            }

            let active_model = subdomain::ActiveModel {
                name: Set(name.clone()),
                created_at: Set(created_at.clone()),
            };
            subdomain::Entity::insert(active_model)
                .exec(&txn)
                .await
                .map_err(|e| {
                    CoreError::StorageError(format!("Failed to insert subdomain {name}: {e}"))
                })?;
            inserted += 1;
        }

        txn.commit()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to commit subdomains: {e}")))?;

        log::info!("Saved {inserted} subdomains to SQLite");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ConnectionTrait;

    use super::*;

    async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(&tmp.path().join("users.sqlite"))
            .await
            .unwrap();
        (store, tmp)
    }

    #[test]
    fn parses_both_timestamp_formats() {
        let rfc = parse_timestamp("2025-03-01T12:30:00+00:00").unwrap();
        let sqlite = parse_timestamp("2025-03-01 12:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[tokio::test]
    async fn rows_without_created_at_get_default() {
        let (store, _tmp) = create_test_store().await;

        store
            .db
            .execute_unprepared("INSERT INTO subdomains (name) VALUES ('pear5')")
            .await
            .unwrap();
        store
            .db
            .execute_unprepared(
                "INSERT INTO dns_records (name, subdomain, rrtype, content) \
                 VALUES ('x.pear5.example.com.', 'pear5', 1, '{}')",
            )
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "pear5");

        let inserted = store.insert_all(&["pear5".to_string()]).await.unwrap();
        assert_eq!(inserted, 0);
    }
}
