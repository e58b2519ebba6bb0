use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for vowelkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A generated resource could not be written to disk.
    #[error("Failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Skill category label is not one of the supported categories.
    #[error("Unknown skill category '{name}': must be one of {available}")]
    UnknownCategory { name: String, available: String },

    /// Grade level is outside the supported range.
    #[error("Invalid grade level {0}: must be between 3 and 8")]
    InvalidGradeLevel(i64),

    /// Practice time is not one of the supported budgets.
    #[error("Invalid practice time {0} minutes: must be one of 5, 10, 15, 20")]
    InvalidPracticeMinutes(i64),

    /// Lesson topic was blank.
    #[error("Lesson topic must not be empty")]
    EmptyTopic,

    /// Resource kind identifier is invalid.
    #[error("Unknown resource '{0}': must be one of vocabulary, worksheet, passage")]
    UnknownResourceKind(String),

    /// Interactive input could not be collected.
    #[error("Failed to read {field}: {reason}")]
    InteractiveInput { field: String, reason: String },

    /// Prompt template asset could not be loaded or rendered.
    #[error("Prompt template error in '{template}': {reason}")]
    PromptTemplate { template: String, reason: String },

    /// The generation service call failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether this error was caused by invalid user input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::UnknownCategory { .. }
                | AppError::InvalidGradeLevel(_)
                | AppError::InvalidPracticeMinutes(_)
                | AppError::EmptyTopic
                | AppError::UnknownResourceKind(_)
        )
    }
}

/// Failure of a single round trip to the generation service.
///
/// Every variant means the same thing to callers: no usable text was produced.
/// The variants only carry the underlying cause for display and logging.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response (connect failure, timeout, TLS).
    #[error("Generation request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status (auth, quota, policy rejection).
    #[error("Generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the chat-completion shape.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    /// The response contained no choice with text content.
    #[error("Generation service returned no content")]
    EmptyResponse,
}
