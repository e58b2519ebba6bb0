use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Phonics skill a student group is struggling with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    LongVowel,
    ShortVowel,
    VowelConsonantE,
    VowelCombination,
    VowelDiphthong,
    RControlled,
    ConsonantLe,
}

impl SkillCategory {
    /// All categories in the order they are offered to the user.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::LongVowel,
        SkillCategory::ShortVowel,
        SkillCategory::VowelConsonantE,
        SkillCategory::VowelCombination,
        SkillCategory::VowelDiphthong,
        SkillCategory::RControlled,
        SkillCategory::ConsonantLe,
    ];

    /// Label shown to teachers and interpolated into prompts.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::LongVowel => "Long vowel sound",
            SkillCategory::ShortVowel => "Short vowel sound",
            SkillCategory::VowelConsonantE => "Vowel-consonant-e",
            SkillCategory::VowelCombination => "Vowel combinations oa, ea, ee, ai",
            SkillCategory::VowelDiphthong => "Vowel diphthongs oi, oy, ou, ew",
            SkillCategory::RControlled => "R-controlled vowels",
            SkillCategory::ConsonantLe => "Consonant-le",
        }
    }

    /// Short identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            SkillCategory::LongVowel => "long-vowel",
            SkillCategory::ShortVowel => "short-vowel",
            SkillCategory::VowelConsonantE => "vowel-consonant-e",
            SkillCategory::VowelCombination => "vowel-combination",
            SkillCategory::VowelDiphthong => "vowel-diphthong",
            SkillCategory::RControlled => "r-controlled",
            SkillCategory::ConsonantLe => "consonant-le",
        }
    }

    /// Definition and example words for this category.
    pub fn definition(&self) -> &'static str {
        resolve(*self)
    }

    /// Parse a category from its slug or label, ignoring case.
    pub fn from_name(name: &str) -> Option<SkillCategory> {
        let needle = name.trim();
        SkillCategory::ALL.into_iter().find(|category| {
            category.slug().eq_ignore_ascii_case(needle)
                || category.label().eq_ignore_ascii_case(needle)
        })
    }
}

/// Resolve a category to its static definition-and-examples text.
///
/// The match is exhaustive: a new category without a definition does not compile.
pub fn resolve(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::LongVowel => {
            "Long vowels are those in which the sounds of the letters A, E, I, O, and U match the spoken name of the letter. Some words with long vowel sounds are me, labor and polar."
        }
        SkillCategory::ShortVowel => {
            "Short vowel sounds occur when the letter is not pronounced the way it sounds. Some words with short vowel sounds are cap and digger."
        }
        SkillCategory::VowelConsonantE => {
            "Words ending with a vowel-consonant-e. For example, cake, mistake, mule, bike, cove, stove."
        }
        SkillCategory::VowelCombination => {
            "Words with the oa, ea, ee, and ai combinations have long vowel sounds. For example, boat, meat, meet, remain, teachable."
        }
        SkillCategory::VowelDiphthong => {
            "Words with the oi, oy, ou, ew combinations. For example, toy, destroy, newsworthy."
        }
        SkillCategory::RControlled => {
            "Words where a vowel is accompanied by the letter r. For example, car, fur, personable."
        }
        SkillCategory::ConsonantLe => {
            "Words ending in -le. For example, battle, belittle, reconcile, personable."
        }
    }
}

impl FromStr for SkillCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::from_name(s).ok_or_else(|| AppError::UnknownCategory {
            name: s.to_string(),
            available: SkillCategory::ALL
                .iter()
                .map(|category| category.slug())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_a_non_empty_definition() {
        for category in SkillCategory::ALL {
            assert!(!resolve(category).trim().is_empty(), "{:?} has no definition", category);
        }
    }

    #[test]
    fn definitions_are_distinct() {
        let definitions: HashSet<&str> = SkillCategory::ALL.into_iter().map(resolve).collect();
        assert_eq!(definitions.len(), SkillCategory::ALL.len());
    }

    #[test]
    fn labels_and_slugs_are_distinct() {
        let labels: HashSet<&str> = SkillCategory::ALL.iter().map(|c| c.label()).collect();
        let slugs: HashSet<&str> = SkillCategory::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(slugs.len(), 7);
    }

    #[test]
    fn long_vowel_resolves_to_long_vowel_definition() {
        let definition = resolve(SkillCategory::LongVowel);
        assert!(definition.starts_with("Long vowels are those"));
        assert!(definition.contains("me, labor and polar"));
    }

    #[test]
    fn parses_slug_and_label_case_insensitively() {
        for category in SkillCategory::ALL {
            assert_eq!(SkillCategory::from_name(category.slug()), Some(category));
            assert_eq!(SkillCategory::from_name(category.label()), Some(category));
            assert_eq!(
                SkillCategory::from_name(&category.label().to_uppercase()),
                Some(category)
            );
        }
        assert_eq!(
            "  long vowel sound ".parse::<SkillCategory>().ok(),
            Some(SkillCategory::LongVowel)
        );
    }

    #[test]
    fn unknown_category_lists_alternatives() {
        let err = "silent-e".parse::<SkillCategory>().unwrap_err();
        match err {
            AppError::UnknownCategory { name, available } => {
                assert_eq!(name, "silent-e");
                assert!(available.contains("long-vowel"));
                assert!(available.contains("consonant-le"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
