pub mod config;
pub mod conversation;
pub mod error;
pub mod lesson;
pub mod resource_kind;
pub mod skill_category;

pub use config::{OutputConfig, ServiceConfig, VowelkitConfig};
pub use conversation::{Conversation, ConversationMessage, Role};
pub use error::{AppError, GenerationError};
pub use lesson::{GradeLevel, LessonParameters, PracticeMinutes};
pub use resource_kind::ResourceKind;
pub use skill_category::{SkillCategory, resolve};
