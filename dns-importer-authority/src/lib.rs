//! # dns-importer-authority
//!
//! Abstraction over the authoritative DNS server's zone-control surface.
//!
//! The importer never talks to the DNS server directly. Every mutation goes
//! through a [`ZoneAuthority`], which exposes exactly two capabilities:
//!
//! - [`ZoneAuthority::create_zone`]: returns a tagged [`ZoneCreation`]
//!   outcome so callers can tell "created" apart from "already there".
//! - [`ZoneAuthority::add_record`]: adds one [`CanonicalRecord`] to its zone.
//!
//! ## Backends
//!
//! | Backend | Mechanism |
//! |---------|-----------|
//! | [PowerDNS](https://www.powerdns.com/) | `pdnsutil` subprocess per mutation |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_importer_authority::{
//!     create_authority, AuthorityConfig, CanonicalRecord, DnsRecordType, ZoneCreation,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let authority = create_authority(&AuthorityConfig::default())?;
//!
//!     let zone = "oyster267.messwithdns.com.";
//!     match authority.create_zone(zone).await? {
//!         ZoneCreation::Created => println!("created {zone}"),
//!         ZoneCreation::AlreadyExists => println!("{zone} was already there"),
//!     }
//!
//!     let record = CanonicalRecord {
//!         name: format!("www.{zone}"),
//!         zone: zone.to_string(),
//!         record_type: DnsRecordType::A,
//!         ttl: 300,
//!         content: "192.0.2.1".to_string(),
//!     };
//!     authority.add_record(&record).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, AuthorityError>`](AuthorityError).
//! [`AuthorityError::Unavailable`] means the tool could not be launched at all
//! and is the only variant a caller should treat as fatal for a whole run.

mod error;
mod factory;
mod providers;
mod traits;
mod types;

pub use error::{AuthorityError, Result};

pub use factory::create_authority;

pub use traits::ZoneAuthority;

pub use types::{AuthorityConfig, CanonicalRecord, DnsRecordType, ZoneCreation};

pub use providers::PdnsUtilAuthority;
