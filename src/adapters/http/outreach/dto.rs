//! Request/response DTOs for the outreach compose boundary.

use serde::{Deserialize, Serialize};

use crate::application::handlers::outreach::PersonaInput;
use crate::domain::lead::LeadRecord;
use crate::domain::persona::{PersonaProfile, Tone};

/// Operator-edited persona fields, without an id: the id is always
/// synthesized from the lead id server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDraft {
    pub name: String,
    pub pain_points: Vec<String>,
    pub value_drivers: Vec<String>,
    pub tone: Tone,
    pub call_to_action: String,
}

/// Request body for `POST /api/outreach`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeOutreachRequest {
    pub lead_id: String,
    /// Absent persona means "derive one from the lead".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<PersonaDraft>,
    pub offer: String,
}

impl ComposeOutreachRequest {
    /// Resolves the optional persona into the explicit tagged input.
    pub fn persona_input(&self) -> PersonaInput {
        match &self.persona {
            Some(draft) => PersonaInput::Supplied {
                name: draft.name.clone(),
                pain_points: draft.pain_points.clone(),
                value_drivers: draft.value_drivers.clone(),
                tone: draft.tone,
                call_to_action: draft.call_to_action.clone(),
            },
            None => PersonaInput::Derive,
        }
    }
}

/// Response body for `POST /api/outreach`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeOutreachResponse {
    pub lead: LeadRecord,
    pub persona: PersonaProfile,
    pub message: String,
}
