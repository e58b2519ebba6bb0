//! Resource generation pipeline.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, LessonParameters, ResourceKind};
use crate::ports::{GenerationClient, ResourceSink};
use crate::services::build_prompt;

/// Result of generating one resource.
#[derive(Debug)]
pub enum ResourceOutcome {
    /// Text was generated. `saved_to` is set when the export succeeded and
    /// `export_error` when it failed; the content is kept either way.
    Generated { content: String, saved_to: Option<PathBuf>, export_error: Option<AppError> },
    /// The pipeline for this resource failed before any text was produced.
    Failed { error: AppError },
}

impl ResourceOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResourceOutcome::Generated { export_error: None, .. })
    }

    /// Generated text, if the service produced any.
    pub fn content(&self) -> Option<&str> {
        match self {
            ResourceOutcome::Generated { content, .. } => Some(content),
            ResourceOutcome::Failed { .. } => None,
        }
    }
}

/// Outcomes for every requested resource, in generation order.
#[derive(Debug)]
pub struct GenerationReport {
    pub outcomes: Vec<(ResourceKind, ResourceOutcome)>,
}

impl GenerationReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| !outcome.is_success()).count()
    }

    pub fn get(&self, kind: ResourceKind) -> Option<&ResourceOutcome> {
        self.outcomes.iter().find(|(k, _)| *k == kind).map(|(_, outcome)| outcome)
    }
}

/// Generate the requested resources.
///
/// Kinds are deduplicated and run in canonical order. Each resource is an
/// independent pipeline: a failure is recorded for that resource and the rest
/// still run.
pub fn execute<C, S>(
    ctx: &AppContext<C, S>,
    params: &LessonParameters,
    kinds: &[ResourceKind],
) -> GenerationReport
where
    C: GenerationClient,
    S: ResourceSink,
{
    let mut requested: Vec<ResourceKind> = kinds.to_vec();
    requested.sort();
    requested.dedup();

    let outcomes = requested
        .into_iter()
        .map(|kind| {
            let outcome = match generate_one(ctx, params, kind) {
                Ok(content) => export(ctx.sink(), kind, content),
                Err(error) => {
                    debug!(resource = kind.slug(), %error, "resource generation failed");
                    ResourceOutcome::Failed { error }
                }
            };
            (kind, outcome)
        })
        .collect();

    GenerationReport { outcomes }
}

fn generate_one<C, S>(
    ctx: &AppContext<C, S>,
    params: &LessonParameters,
    kind: ResourceKind,
) -> Result<String, AppError>
where
    C: GenerationClient,
    S: ResourceSink,
{
    let definition = kind.uses_definition().then(|| params.category().definition());
    let conversation = build_prompt(kind, params, definition)?;

    info!(
        resource = kind.slug(),
        model = ctx.model(),
        prompt_chars = conversation.char_count(),
        "requesting generation"
    );
    Ok(ctx.client().generate(&conversation, ctx.model())?)
}

fn export<S: ResourceSink>(sink: Option<&S>, kind: ResourceKind, content: String) -> ResourceOutcome {
    let Some(sink) = sink else {
        return ResourceOutcome::Generated { content, saved_to: None, export_error: None };
    };

    match sink.store(kind, &content) {
        Ok(path) => ResourceOutcome::Generated { content, saved_to: Some(path), export_error: None },
        Err(error) => {
            debug!(resource = kind.slug(), %error, "resource export failed");
            ResourceOutcome::Generated { content, saved_to: None, export_error: Some(error) }
        }
    }
}
