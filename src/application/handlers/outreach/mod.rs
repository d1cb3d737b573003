//! Outreach composition handlers.

mod compose_outreach;

pub use compose_outreach::{
    ComposeOutreachCommand, ComposeOutreachHandler, ComposeOutreachResult, PersonaInput,
};
