//! HTTP adapter for the lead query boundary.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::LeadsAppState;
pub use routes::leads_router;
