//! Adapters - concrete implementations of ports and the HTTP surface.

pub mod catalog;
pub mod http;
