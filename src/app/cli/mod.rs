//! CLI Adapter.

mod inputs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, GenerateOptions, ResourceOutcome};
use crate::app::logging;
use crate::domain::{AppError, ResourceKind};

use inputs::{LessonArgs, resolve_lesson};

#[derive(Parser)]
#[command(name = "vowelkit")]
#[command(version)]
#[command(
    about = "Generate phonics intervention resources: vocabulary lists, worksheets and reading passages",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate resources through the chat-completion service
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        lesson: LessonArgs,
        /// Only generate these resources (vocabulary, worksheet, passage)
        #[arg(long = "only", value_name = "RESOURCE")]
        only: Vec<String>,
        /// Directory for exported text files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Print resources without writing files
        #[arg(long)]
        no_save: bool,
        /// Path to vowelkit.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show the prompt that would be sent for a resource
    #[clap(visible_alias = "p")]
    Preview {
        /// Resource (vocabulary, worksheet, passage)
        resource: String,
        #[command(flatten)]
        lesson: LessonArgs,
    },
    /// List supported skill categories
    #[clap(visible_alias = "ls")]
    Categories,
}

/// Entry point for the CLI.
pub fn run() {
    logging::init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { lesson, only, output_dir, no_save, config } => {
            run_generate(lesson, only, output_dir, no_save, config)
        }
        Commands::Preview { resource, lesson } => run_preview(&resource, lesson).map(|_| 0),
        Commands::Categories => {
            run_categories();
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(if e.is_input_error() { 2 } else { 1 });
        }
    }
}

fn parse_kinds(values: &[String]) -> Result<Vec<ResourceKind>, AppError> {
    values.iter().map(|value| value.parse()).collect()
}

fn run_generate(
    lesson: LessonArgs,
    only: Vec<String>,
    output_dir: Option<PathBuf>,
    no_save: bool,
    config: Option<PathBuf>,
) -> Result<i32, AppError> {
    let kinds = parse_kinds(&only)?;
    let Some(params) = resolve_lesson(lesson)? else {
        return Ok(0);
    };

    let report = api::generate(GenerateOptions {
        params,
        kinds,
        config_path: config,
        output_dir,
        save: !no_save,
    })?;

    for (kind, outcome) in &report.outcomes {
        match outcome {
            ResourceOutcome::Generated { content, saved_to, export_error } => {
                println!("=== {} ===", kind.title());
                println!("{}", content);
                if let Some(path) = saved_to {
                    println!("✅ Saved {} to {}", kind.title(), path.display());
                }
                if let Some(error) = export_error {
                    eprintln!("Error saving {}: {}", kind.title(), error);
                }
                println!();
            }
            ResourceOutcome::Failed { error } => {
                eprintln!("Error generating {}: {}", kind.title(), error);
            }
        }
    }

    if report.all_succeeded() {
        Ok(0)
    } else {
        eprintln!("⚠️  {} of {} resource(s) failed", report.failure_count(), report.outcomes.len());
        Ok(1)
    }
}

fn run_preview(resource: &str, lesson: LessonArgs) -> Result<(), AppError> {
    let kind: ResourceKind = resource.parse()?;
    let Some(params) = resolve_lesson(lesson)? else {
        return Ok(());
    };

    let conversation = api::preview(&params, kind)?;
    for message in conversation.messages() {
        println!("--- {} ---", message.role.as_str());
        println!("{}", message.content);
    }
    Ok(())
}

fn run_categories() {
    for summary in api::categories() {
        println!("{} ({})", summary.label, summary.slug);
        println!("    {}", summary.definition);
    }
}
