//! DNS Importer Core Library
//!
//! Turns captured DNS resource records into provisioning calls against an
//! authoritative server:
//! - Record decoding (generic, type-tagged records → canonical content strings)
//! - Zone routing (record name → owning zone)
//! - Batch grouping (zone → ordered records)
//! - Provisioning (create zone, then add each record, isolating failures)
//! - Subdomain loading into the persistent store
//!
//! Storage and the zone-control tool are reached through traits, so the
//! pipeline can run against in-memory fakes.

pub mod error;
pub mod pipeline;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, DecodeError};
pub use pipeline::{RecordDecoder, ZoneGroups, ZoneRouter};
pub use services::ServiceContext;
pub use traits::{SubdomainRepository, ZoneAuthority};
