use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// One of the three classroom resources the tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Vocabulary,
    Worksheet,
    Passage,
}

impl ResourceKind {
    /// All kinds in generation order.
    pub const ALL: [ResourceKind; 3] =
        [ResourceKind::Vocabulary, ResourceKind::Worksheet, ResourceKind::Passage];

    /// Identifier used on the command line and for template assets.
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Vocabulary => "vocabulary",
            ResourceKind::Worksheet => "worksheet",
            ResourceKind::Passage => "passage",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Vocabulary => "Vocabulary List",
            ResourceKind::Worksheet => "Worksheet",
            ResourceKind::Passage => "Reading Materials",
        }
    }

    /// File name the generated text is exported under.
    pub fn file_name(&self) -> &'static str {
        match self {
            ResourceKind::Vocabulary => "vocab_list.txt",
            ResourceKind::Worksheet => "student_worksheet.txt",
            ResourceKind::Passage => "student_reading_passages.txt",
        }
    }

    /// Whether the prompt for this kind uses the category definition.
    pub fn uses_definition(&self) -> bool {
        matches!(self, ResourceKind::Vocabulary)
    }

    pub fn from_slug(name: &str) -> Option<ResourceKind> {
        match name.trim().to_lowercase().as_str() {
            "vocabulary" | "vocab" => Some(ResourceKind::Vocabulary),
            "worksheet" => Some(ResourceKind::Worksheet),
            "passage" | "passages" | "reading" => Some(ResourceKind::Passage),
            _ => None,
        }
    }
}

impl FromStr for ResourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::from_slug(s).ok_or_else(|| AppError::UnknownResourceKind(s.to_string()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_match_export_contract() {
        assert_eq!(ResourceKind::Vocabulary.file_name(), "vocab_list.txt");
        assert_eq!(ResourceKind::Worksheet.file_name(), "student_worksheet.txt");
        assert_eq!(ResourceKind::Passage.file_name(), "student_reading_passages.txt");
    }

    #[test]
    fn slugs_roundtrip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.slug().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn only_vocabulary_uses_definition() {
        let users: Vec<_> = ResourceKind::ALL.into_iter().filter(|k| k.uses_definition()).collect();
        assert_eq!(users, vec![ResourceKind::Vocabulary]);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(matches!("quiz".parse::<ResourceKind>(), Err(AppError::UnknownResourceKind(_))));
    }
}
