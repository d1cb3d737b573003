//! Lead catalog port (read side).
//!
//! The catalog is write-once at process start and read-many thereafter;
//! no mutation API exists. Implementations must return records in a
//! fixed, stable order (insertion order at load time) so that filtered
//! result sets stay order-preserving.

use async_trait::async_trait;

use crate::domain::lead::{LeadError, LeadRecord};

/// Read-only access to the immutable lead dataset.
#[async_trait]
pub trait LeadCatalog: Send + Sync {
    /// Returns the full dataset in stable catalog order.
    async fn all(&self) -> Result<Vec<LeadRecord>, LeadError>;

    /// Looks up a single lead by id. `Ok(None)` means the id is absent;
    /// callers that require presence turn that into `LeadError::NotFound`.
    async fn find_by_id(&self, id: &str) -> Result<Option<LeadRecord>, LeadError>;
}
