//! Lesson input collection: flags first, interactive prompts for anything missing.

use std::io::{ErrorKind, IsTerminal};

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, GradeLevel, LessonParameters, PracticeMinutes, SkillCategory};

/// Lesson inputs accepted on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct LessonArgs {
    /// Skill category (slug such as long-vowel, or the full label)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Student grade level (3-8)
    #[arg(short, long)]
    pub grade: Option<i64>,
    /// Lesson topic
    #[arg(short, long)]
    pub topic: Option<String>,
    /// Practice time in minutes (5, 10, 15 or 20)
    #[arg(short, long)]
    pub minutes: Option<i64>,
}

/// Validate provided values and prompt for missing ones.
///
/// Returns `None` when the user cancels an interactive prompt.
pub fn resolve_lesson(args: LessonArgs) -> Result<Option<LessonParameters>, AppError> {
    // Validate everything given on the command line before prompting.
    let category = args.category.as_deref().map(str::parse::<SkillCategory>).transpose()?;
    let grade = args.grade.map(GradeLevel::new).transpose()?;
    let minutes = args.minutes.map(PracticeMinutes::new).transpose()?;
    if let Some(topic) = &args.topic
        && topic.trim().is_empty()
    {
        return Err(AppError::EmptyTopic);
    }

    let category = match category {
        Some(value) => value,
        None => match prompt_category()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let grade = match grade {
        Some(value) => value,
        None => match prompt_grade()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let topic = match args.topic {
        Some(value) => value,
        None => match prompt_topic()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let minutes = match minutes {
        Some(value) => value,
        None => match prompt_minutes()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    LessonParameters::new(category, grade, topic, minutes).map(Some)
}

fn require_terminal(field: &str, flag: &str) -> Result<(), AppError> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(AppError::InteractiveInput {
            field: field.to_string(),
            reason: format!("no terminal available; pass {} instead", flag),
        })
    }
}

fn prompt_category() -> Result<Option<SkillCategory>, AppError> {
    require_terminal("skill category", "--category")?;

    let items: Vec<&str> = SkillCategory::ALL.iter().map(|category| category.label()).collect();
    let selection = Select::new()
        .with_prompt("What are your students struggling with?")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| interactive_error("skill category", err))?;

    Ok(selection.map(|index| SkillCategory::ALL[index]))
}

fn prompt_grade() -> Result<Option<GradeLevel>, AppError> {
    require_terminal("grade level", "--grade")?;

    let result = Input::<i64>::new()
        .with_prompt("What grade level are your students? (3-8)")
        .validate_with(|value: &i64| -> Result<(), String> {
            GradeLevel::new(*value).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text();

    match result {
        Ok(value) => GradeLevel::new(value).map(Some),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(interactive_error("grade level", err)),
    }
}

fn prompt_topic() -> Result<Option<String>, AppError> {
    require_terminal("topic", "--topic")?;

    let result = Input::<String>::new()
        .with_prompt("What topic is this lesson about?")
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() { Err("Topic must not be empty") } else { Ok(()) }
        })
        .interact_text();

    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(interactive_error("topic", err)),
    }
}

fn prompt_minutes() -> Result<Option<PracticeMinutes>, AppError> {
    require_terminal("practice time", "--minutes")?;

    let items: Vec<String> =
        PracticeMinutes::ALL.iter().map(|minutes| format!("{} minutes", minutes)).collect();
    let selection = Select::new()
        .with_prompt("How much time do you have to practice?")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| interactive_error("practice time", err))?;

    Ok(selection.map(|index| PracticeMinutes::ALL[index]))
}

fn interactive_error(field: &str, err: DialoguerError) -> AppError {
    AppError::InteractiveInput { field: field.to_string(), reason: err.to_string() }
}
