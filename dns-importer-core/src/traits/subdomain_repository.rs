//! Subdomain persistence abstraction

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Subdomain;

/// Subdomain repository Trait
///
/// Implementations:
/// - `SqliteStore` (`SeaORM`, `subdomains` table)
#[async_trait]
pub trait SubdomainRepository: Send + Sync {
    /// List all registered subdomains, ordered by name.
    async fn find_all(&self) -> CoreResult<Vec<Subdomain>>;

    /// Register a batch of names.
    ///
    /// # Returns
    /// * Number of names actually inserted. Names already present (including
    ///   repeats within `names`) are skipped.
    ///
    /// # Note
    /// The batch is all-or-nothing: if any insert fails, nothing from the
    /// batch is kept.
    async fn insert_all(&self, names: &[String]) -> CoreResult<usize>;
}
