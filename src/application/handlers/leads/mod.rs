//! Lead query handlers.

mod search_leads;
mod summarize_leads;

pub use search_leads::{SearchLeadsHandler, SearchLeadsQuery};
pub use summarize_leads::{SummarizeLeadsHandler, SummarizeLeadsQuery};
