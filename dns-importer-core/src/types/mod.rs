//! Type definitions

mod raw;
mod report;
mod subdomain;

pub use raw::{RawRecord, RecordBody, RecordEnvelope, RecordHeader};
pub use report::{
    DecodeFailure, ImportReport, ProvisionResult, RecordFailure, ZoneOutcome, ZoneStatus,
};
pub use subdomain::{Subdomain, SubdomainEntry, SubdomainImportResult};

// Re-export authority library types
pub use dns_importer_authority::{CanonicalRecord, DnsRecordType, ZoneCreation};
