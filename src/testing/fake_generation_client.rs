use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::{Conversation, GenerationError};
use crate::ports::GenerationClient;

/// A recorded call to the fake client.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub conversation: Conversation,
    pub model: String,
}

/// Scripted generation client for testing.
///
/// Replies are consumed in call order; once the script runs out, every call
/// echoes a fixed reply.
#[derive(Default)]
pub struct FakeGenerationClient {
    replies: RefCell<VecDeque<Result<String, GenerationError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl FakeGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<Result<String, GenerationError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), calls: RefCell::default() }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, conversation: &Conversation, model: &str) -> Result<String, GenerationError> {
        self.calls
            .borrow_mut()
            .push(RecordedCall { conversation: conversation.clone(), model: model.to_string() });
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| Ok("generated text".to_string()))
    }
}
