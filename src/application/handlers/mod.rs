//! Use case handlers, grouped by domain module.

pub mod leads;
pub mod outreach;
