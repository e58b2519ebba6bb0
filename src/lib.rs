//! vowelkit: generate phonics intervention resources through a chat-completion service.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CategorySummary, GenerateOptions, GenerationReport, ResourceOutcome, categories, generate,
    preview,
};
pub use domain::{
    AppError, Conversation, GenerationError, GradeLevel, LessonParameters, PracticeMinutes,
    ResourceKind, SkillCategory, resolve,
};
pub use ports::{GenerationClient, ResourceSink};
pub use services::{DirectoryResourceSink, HttpChatClient, build_prompt};
