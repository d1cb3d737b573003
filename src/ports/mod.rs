//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LeadCatalog` - read-only access to the immutable lead dataset

mod lead_catalog;

pub use lead_catalog::LeadCatalog;
