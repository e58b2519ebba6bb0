//! Validated lesson inputs.
//!
//! Values only reach the prompt builder through these types, so an out-of-range
//! grade or practice time is rejected at the input boundary.

use std::fmt;

use crate::domain::{AppError, SkillCategory};

/// Student reading grade level, 3 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GradeLevel(u8);

impl GradeLevel {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 8;

    pub fn new(value: i64) -> Result<Self, AppError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AppError::InvalidGradeLevel(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Practice time budget in minutes.
///
/// The vocabulary prompt also uses this as the number of words per difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeMinutes {
    Five,
    Ten,
    Fifteen,
    Twenty,
}

impl PracticeMinutes {
    pub const ALL: [PracticeMinutes; 4] =
        [PracticeMinutes::Five, PracticeMinutes::Ten, PracticeMinutes::Fifteen, PracticeMinutes::Twenty];

    pub fn new(value: i64) -> Result<Self, AppError> {
        PracticeMinutes::ALL
            .into_iter()
            .find(|minutes| i64::from(minutes.minutes()) == value)
            .ok_or(AppError::InvalidPracticeMinutes(value))
    }

    pub fn minutes(&self) -> u32 {
        match self {
            PracticeMinutes::Five => 5,
            PracticeMinutes::Ten => 10,
            PracticeMinutes::Fifteen => 15,
            PracticeMinutes::Twenty => 20,
        }
    }
}

impl fmt::Display for PracticeMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

/// Inputs for one generation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonParameters {
    category: SkillCategory,
    grade_level: GradeLevel,
    topic: String,
    practice_minutes: PracticeMinutes,
}

impl LessonParameters {
    /// Build parameters from validated parts.
    ///
    /// The topic is trimmed and must not be empty. Its content is otherwise kept
    /// verbatim; nothing is escaped before it is sent to the generation service.
    pub fn new(
        category: SkillCategory,
        grade_level: GradeLevel,
        topic: impl Into<String>,
        practice_minutes: PracticeMinutes,
    ) -> Result<Self, AppError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(AppError::EmptyTopic);
        }
        Ok(Self { category, grade_level, topic, practice_minutes })
    }

    /// Validate raw input values, as received from the CLI, into parameters.
    pub fn from_raw(
        category: &str,
        grade_level: i64,
        topic: &str,
        practice_minutes: i64,
    ) -> Result<Self, AppError> {
        Self::new(
            category.parse()?,
            GradeLevel::new(grade_level)?,
            topic,
            PracticeMinutes::new(practice_minutes)?,
        )
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn grade_level(&self) -> GradeLevel {
        self.grade_level
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn practice_minutes(&self) -> PracticeMinutes {
        self.practice_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn grade_level_accepts_supported_range() {
        for value in 3..=8 {
            assert_eq!(GradeLevel::new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn practice_minutes_accepts_supported_budgets() {
        for value in [5, 10, 15, 20] {
            assert_eq!(PracticeMinutes::new(value).unwrap().minutes() as i64, value);
        }
    }

    #[test]
    fn topic_is_trimmed_and_required() {
        let params = LessonParameters::from_raw("long-vowel", 5, "  ocean animals \n", 10).unwrap();
        assert_eq!(params.topic(), "ocean animals");

        let err = LessonParameters::from_raw("long-vowel", 5, "   ", 10).unwrap_err();
        assert!(matches!(err, AppError::EmptyTopic));
    }

    #[test]
    fn from_raw_reports_the_first_invalid_field() {
        assert!(matches!(
            LessonParameters::from_raw("nope", 9, "x", 7),
            Err(AppError::UnknownCategory { .. })
        ));
        assert!(matches!(
            LessonParameters::from_raw("r-controlled", 9, "x", 7),
            Err(AppError::InvalidGradeLevel(9))
        ));
        assert!(matches!(
            LessonParameters::from_raw("r-controlled", 4, "x", 7),
            Err(AppError::InvalidPracticeMinutes(7))
        ));
    }

    proptest! {
        #[test]
        fn grade_outside_range_is_rejected(value in prop_oneof![i64::MIN..3i64, 9i64..i64::MAX]) {
            prop_assert!(matches!(GradeLevel::new(value), Err(AppError::InvalidGradeLevel(v)) if v == value));
        }

        #[test]
        fn unsupported_minutes_are_rejected(value in any::<i64>()) {
            prop_assume!(![5, 10, 15, 20].contains(&value));
            prop_assert!(matches!(PracticeMinutes::new(value), Err(AppError::InvalidPracticeMinutes(v)) if v == value));
        }
    }
}
