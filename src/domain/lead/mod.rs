//! Lead domain: prospect records, the faceted filter engine, and
//! result-set metrics.

mod email_status;
mod error;
mod filter;
mod metrics;
mod record;
mod seniority;
mod signal;

pub use email_status::EmailStatus;
pub use error::LeadError;
pub use filter::{search_leads, LeadFilter};
pub use metrics::{summarize, CatalogSummary};
pub use record::LeadRecord;
pub use seniority::Seniority;
pub use signal::IntentSignal;
