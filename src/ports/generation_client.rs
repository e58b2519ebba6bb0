//! Generation service port definition.

use crate::domain::{Conversation, GenerationError};

/// Port for text generation.
///
/// Implementations send the conversation as the complete context and return the
/// text of the first reply. Nothing is retried.
pub trait GenerationClient {
    /// Generate text for a conversation with the given model.
    fn generate(&self, conversation: &Conversation, model: &str) -> Result<String, GenerationError>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn generate(&self, conversation: &Conversation, model: &str) -> Result<String, GenerationError> {
        (**self).generate(conversation, model)
    }
}
