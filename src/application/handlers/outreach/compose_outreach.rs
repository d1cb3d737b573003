//! ComposeOutreachHandler - Command handler for message synthesis.

use std::sync::Arc;

use crate::domain::lead::{LeadError, LeadRecord};
use crate::domain::outreach::compose_message;
use crate::domain::persona::{derive_persona, persona_id_for, PersonaProfile, Tone};
use crate::ports::LeadCatalog;

/// How the persona for a compose request is obtained.
///
/// Modeled as an explicit tagged union instead of an optional persona so
/// that "supplied" and "derive for me" cannot be confused.
#[derive(Debug, Clone)]
pub enum PersonaInput {
    /// Operator-edited persona fields, used as-is. The id is synthesized
    /// from the lead id, so supplied personas stay comparable with
    /// derived ones.
    Supplied {
        name: String,
        pain_points: Vec<String>,
        value_drivers: Vec<String>,
        tone: Tone,
        call_to_action: String,
    },
    /// Derive a default persona from the lead's attributes.
    Derive,
}

impl PersonaInput {
    fn resolve(self, lead: &LeadRecord) -> PersonaProfile {
        match self {
            PersonaInput::Supplied {
                name,
                pain_points,
                value_drivers,
                tone,
                call_to_action,
            } => PersonaProfile {
                id: persona_id_for(&lead.id),
                name,
                pain_points,
                value_drivers,
                tone,
                call_to_action,
            },
            PersonaInput::Derive => derive_persona(lead),
        }
    }
}

/// Command to compose an outreach message for one lead.
#[derive(Debug, Clone)]
pub struct ComposeOutreachCommand {
    pub lead_id: String,
    pub persona: PersonaInput,
    pub offer: String,
}

/// Result of a successful composition: the narrative plus the inputs the
/// boundary echoes back for independent layout.
#[derive(Debug, Clone)]
pub struct ComposeOutreachResult {
    pub lead: LeadRecord,
    pub persona: PersonaProfile,
    pub message: String,
}

/// Handler resolving the persona and composing the outreach narrative.
pub struct ComposeOutreachHandler {
    catalog: Arc<dyn LeadCatalog>,
}

impl ComposeOutreachHandler {
    pub fn new(catalog: Arc<dyn LeadCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        command: ComposeOutreachCommand,
    ) -> Result<ComposeOutreachResult, LeadError> {
        let lead = self
            .catalog
            .find_by_id(&command.lead_id)
            .await?
            .ok_or_else(|| LeadError::not_found(&command.lead_id))?;

        let persona = command.persona.resolve(&lead);
        let message = compose_message(&lead, &persona, &command.offer);

        Ok(ComposeOutreachResult {
            lead,
            persona,
            message,
        })
    }
}
