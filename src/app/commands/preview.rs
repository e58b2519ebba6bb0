//! Prompt preview: build a conversation without contacting the service.

use crate::domain::{AppError, Conversation, LessonParameters, ResourceKind};
use crate::services::build_prompt;

/// Build the conversation that `generate` would send for one resource.
pub fn execute(params: &LessonParameters, kind: ResourceKind) -> Result<Conversation, AppError> {
    let definition = kind.uses_definition().then(|| params.category().definition());
    build_prompt(kind, params, definition)
}
