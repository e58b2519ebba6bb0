//! Prompt builder.
//!
//! Turns validated lesson parameters into the two-message conversation for one
//! resource kind, using the embedded template assets.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, Conversation, LessonParameters, ResourceKind, resolve};
use crate::services::prompt_assets::{load_template, template_path};

/// Values available to prompt templates.
#[derive(Debug, Serialize)]
struct PromptVariables<'a> {
    category: &'a str,
    definition: &'a str,
    grade_level: u8,
    practice_minutes: u32,
    topic: &'a str,
}

/// Build the conversation for a resource kind.
///
/// `definition` overrides the category definition for the vocabulary prompt; when
/// absent the resolver's definition for `params.category()` is used. Worksheet and
/// passage prompts ignore it.
pub fn build_prompt(
    kind: ResourceKind,
    params: &LessonParameters,
    definition: Option<&str>,
) -> Result<Conversation, AppError> {
    let template = load_template(kind)?;
    let category = params.category();

    let variables = PromptVariables {
        category: category.label(),
        definition: definition.unwrap_or_else(|| resolve(category)),
        grade_level: params.grade_level().value(),
        practice_minutes: params.practice_minutes().minutes(),
        topic: params.topic(),
    };

    let user = render_template(&template.user, &variables, &template_path(kind))?;
    Ok(Conversation::new(template.system, user))
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render a template string using strict Jinja-compatible semantics.
///
/// Only `{{ ... }}` interpolation is allowed. Control structures are rejected.
fn render_template(
    template: &str,
    variables: &PromptVariables<'_>,
    template_name: &str,
) -> Result<String, AppError> {
    if let Some(token) = disallowed_template_token(template) {
        return Err(AppError::PromptTemplate {
            template: template_name.to_string(),
            reason: format!("template syntax '{}' is not allowed", token),
        });
    }

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, variables).map_err(|err| AppError::PromptTemplate {
        template: template_name.to_string(),
        reason: err.to_string(),
    })
}

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
