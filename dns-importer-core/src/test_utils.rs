//! Test helpers
//!
//! In-memory fakes for the zone authority and the subdomain store, plus
//! small record factories.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dns_importer_authority::AuthorityError;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::pipeline::ZoneRouter;
use crate::services::ServiceContext;
use crate::traits::{SubdomainRepository, ZoneAuthority};
use crate::types::{CanonicalRecord, DnsRecordType, RawRecord, Subdomain, ZoneCreation};

// ===== MockZoneAuthority =====

/// One call made against the mock authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityCall {
    CreateZone(String),
    AddRecord(CanonicalRecord),
}

pub struct MockZoneAuthority {
    calls: RwLock<Vec<AuthorityCall>>,
    zones: RwLock<HashSet<String>>,
    /// zone → error returned by `create_zone`
    zone_failures: RwLock<HashMap<String, AuthorityError>>,
    /// record name → error returned by `add_record`
    record_failures: RwLock<HashMap<String, AuthorityError>>,
}

impl MockZoneAuthority {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            zones: RwLock::new(HashSet::new()),
            zone_failures: RwLock::new(HashMap::new()),
            record_failures: RwLock::new(HashMap::new()),
        }
    }

    pub async fn calls(&self) -> Vec<AuthorityCall> {
        self.calls.read().await.clone()
    }

    /// Names of every `add_record` attempt, failed ones included.
    pub async fn added_names(&self) -> Vec<String> {
        self.calls
            .read()
            .await
            .iter()
            .filter_map(|c| match c {
                AuthorityCall::AddRecord(r) => Some(r.name.clone()),
                AuthorityCall::CreateZone(_) => None,
            })
            .collect()
    }

    pub async fn add_existing_zone(&self, zone: &str) {
        self.zones.write().await.insert(zone.to_string());
    }

    pub async fn fail_zone(&self, zone: &str, err: AuthorityError) {
        self.zone_failures
            .write()
            .await
            .insert(zone.to_string(), err);
    }

    pub async fn fail_record(&self, name: &str, err: AuthorityError) {
        self.record_failures
            .write()
            .await
            .insert(name.to_string(), err);
    }
}

#[async_trait]
impl ZoneAuthority for MockZoneAuthority {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_zone(&self, zone: &str) -> dns_importer_authority::Result<ZoneCreation> {
        self.calls
            .write()
            .await
            .push(AuthorityCall::CreateZone(zone.to_string()));
        if let Some(e) = self.zone_failures.read().await.get(zone) {
            return Err(e.clone());
        }
        if self.zones.write().await.insert(zone.to_string()) {
            Ok(ZoneCreation::Created)
        } else {
            Ok(ZoneCreation::AlreadyExists)
        }
    }

    async fn add_record(&self, record: &CanonicalRecord) -> dns_importer_authority::Result<()> {
        self.calls
            .write()
            .await
            .push(AuthorityCall::AddRecord(record.clone()));
        match self.record_failures.read().await.get(&record.name) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

// ===== MockSubdomainRepository =====

pub struct MockSubdomainRepository {
    subdomains: RwLock<BTreeMap<String, Subdomain>>,
    /// If Some, `insert_all` fails with this error and keeps nothing
    insert_error: RwLock<Option<String>>,
}

impl MockSubdomainRepository {
    pub fn new() -> Self {
        Self {
            subdomains: RwLock::new(BTreeMap::new()),
            insert_error: RwLock::new(None),
        }
    }

    pub async fn set_insert_error(&self, err: Option<String>) {
        *self.insert_error.write().await = err;
    }

    pub async fn names(&self) -> Vec<String> {
        self.subdomains.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl SubdomainRepository for MockSubdomainRepository {
    async fn find_all(&self) -> CoreResult<Vec<Subdomain>> {
        Ok(self.subdomains.read().await.values().cloned().collect())
    }

    async fn insert_all(&self, names: &[String]) -> CoreResult<usize> {
        if let Some(ref msg) = *self.insert_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        let mut store = self.subdomains.write().await;
        let mut inserted = 0;
        for name in names {
            if store.contains_key(name) {
                continue;
            }
            store.insert(
                name.clone(),
                Subdomain {
                    name: name.clone(),
                    created_at: Utc::now(),
                },
            );
            inserted += 1;
        }
        Ok(inserted)
    }
}

// ===== Factories =====

pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockZoneAuthority>,
    Arc<MockSubdomainRepository>,
) {
    let authority = Arc::new(MockZoneAuthority::new());
    let repository = Arc::new(MockSubdomainRepository::new());
    let ctx = Arc::new(ServiceContext::new(
        authority.clone(),
        repository.clone(),
        ZoneRouter::default(),
    ));
    (ctx, authority, repository)
}

/// A decoded A record routed with the default router.
pub fn a_record(name: &str, address: &str) -> CanonicalRecord {
    CanonicalRecord {
        name: name.to_string(),
        zone: ZoneRouter::default().zone_of(name),
        record_type: DnsRecordType::A,
        ttl: 60,
        content: address.to_string(),
    }
}

/// A captured record with the given header and type-specific fields.
pub fn raw_record(name: &str, rrtype: u16, fields: serde_json::Value) -> RawRecord {
    let mut value = fields;
    value["Hdr"] = serde_json::json!({
        "Name": name,
        "Rrtype": rrtype,
        "Class": 1,
        "Ttl": 60,
        "Rdlength": 0,
    });
    serde_json::from_value(value).unwrap()
}

pub fn rejected(message: &str) -> AuthorityError {
    AuthorityError::Rejected {
        authority: "mock".to_string(),
        exit_code: Some(1),
        raw_message: message.to_string(),
    }
}
