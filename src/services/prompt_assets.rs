use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, ResourceKind};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Prompt template asset for one resource kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptTemplate {
    /// Resource kind slug the template belongs to.
    pub kind: String,
    /// System framing sent as the first message.
    pub system: String,
    /// Instruction template rendered into the user message.
    pub user: String,
}

/// Asset path of the template for a resource kind.
pub fn template_path(kind: ResourceKind) -> String {
    format!("{}.yml", kind.slug())
}

/// Load and parse the embedded template for a resource kind.
pub fn load_template(kind: ResourceKind) -> Result<PromptTemplate, AppError> {
    let path = template_path(kind);
    let content = PROMPTS_DIR
        .get_file(&path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::PromptTemplate {
            template: path.clone(),
            reason: "embedded asset missing".to_string(),
        })?;

    let template: PromptTemplate = serde_yaml::from_str(content)
        .map_err(|err| AppError::PromptTemplate { template: path.clone(), reason: err.to_string() })?;

    if template.kind != kind.slug() {
        return Err(AppError::PromptTemplate {
            template: path,
            reason: format!("declares kind '{}' but is loaded for '{}'", template.kind, kind.slug()),
        });
    }

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_template() {
        for kind in ResourceKind::ALL {
            let template = load_template(kind).unwrap();
            assert_eq!(template.kind, kind.slug());
            assert!(!template.system.trim().is_empty());
            assert!(!template.user.trim().is_empty());
        }
    }

    #[test]
    fn system_framing_forbids_extra_output() {
        for kind in ResourceKind::ALL {
            let template = load_template(kind).unwrap();
            assert!(template.system.contains("experienced intervention specialist"));
            assert!(template.system.contains("Do not include anything in your response other than"));
        }
    }

    #[test]
    fn folded_templates_have_no_trailing_newline() {
        for kind in ResourceKind::ALL {
            let template = load_template(kind).unwrap();
            assert!(!template.user.ends_with('\n'));
            assert!(!template.system.ends_with('\n'));
        }
    }
}
