//! Lead Scout - Sales Intelligence Lead Query & Outreach Service
//!
//! This crate implements a faceted lead search engine, rule-based persona
//! inference, and deterministic outreach message composition over an
//! immutable in-memory lead catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
