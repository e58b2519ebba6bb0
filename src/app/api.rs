//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation and command execution.

use std::path::PathBuf;

use tracing::debug;

use crate::app::{
    AppContext,
    commands::{categories, generate, preview},
    config::load_config,
};
use crate::services::{DirectoryResourceSink, HttpChatClient};

pub use crate::app::commands::categories::CategorySummary;
pub use crate::app::commands::generate::{GenerationReport, ResourceOutcome};
pub use crate::domain::{AppError, Conversation, LessonParameters, ResourceKind};

/// Options for a generation session.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Validated lesson inputs.
    pub params: LessonParameters,
    /// Resources to generate. Empty means all three.
    pub kinds: Vec<ResourceKind>,
    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
    /// Output directory override.
    pub output_dir: Option<PathBuf>,
    /// Whether generated resources are written to files.
    pub save: bool,
}

/// Generate resources using the configured chat-completion service.
///
/// Configuration problems (unreadable config, missing API key) fail the whole
/// call. Generation failures are reported per resource in the returned report.
pub fn generate(options: GenerateOptions) -> Result<GenerationReport, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let client = HttpChatClient::from_env_with_config(&config.service)?;

    let sink = options.save.then(|| {
        DirectoryResourceSink::new(options.output_dir.unwrap_or(config.output.directory))
    });
    if let Some(sink) = &sink {
        debug!(directory = %sink.root().display(), "exporting resources");
    }

    let kinds = if options.kinds.is_empty() { ResourceKind::ALL.to_vec() } else { options.kinds };

    let ctx = AppContext::new(client, sink, config.service.model);
    Ok(generate::execute(&ctx, &options.params, &kinds))
}

/// Build the conversation for a resource without contacting the service.
pub fn preview(params: &LessonParameters, kind: ResourceKind) -> Result<Conversation, AppError> {
    preview::execute(params, kind)
}

/// List all supported skill categories.
pub fn categories() -> Vec<CategorySummary> {
    categories::list()
}
