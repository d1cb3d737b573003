//! HTTP adapter for the outreach compose boundary.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OutreachAppState;
pub use routes::outreach_router;
