//! Storage and authority abstraction traits

mod subdomain_repository;

pub use subdomain_repository::SubdomainRepository;

// Re-export the authority capability trait
pub use dns_importer_authority::ZoneAuthority;
