//! Flat and structured load commands.

use std::path::Path;

use interview_core::insert::{insert_questions, InsertSummary};
use interview_core::question::{
    default_questions, read_questions_file, QuestionFileError, QuestionItem,
};
use interview_core::storage::{InMemoryQuestionStore, QuestionStore};

use crate::cli::{Cli, Commands, Global, StructuredCommand};
use crate::config::LoaderConfig;
use crate::dynamodb::{create_client, DynamoDbQuestionStore};
use crate::error::Result;
use crate::prelude::*;

/// Main entry point for a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = LoaderConfig::from(&cli.global);

    match cli.command {
        Commands::Flat => run_flat(&config, &cli.global).await,
        Commands::Structured(cmd) => run_structured(cmd, &config, &cli.global).await,
    }
}

async fn run_flat(config: &LoaderConfig, global: &Global) -> Result<()> {
    let items = default_questions().into_iter().map(QuestionItem::from).collect();
    load(config, global, items).await
}

async fn run_structured(
    cmd: StructuredCommand,
    config: &LoaderConfig,
    global: &Global,
) -> Result<()> {
    let Some(items) = load_questions_file(&cmd.file)? else {
        aprintln!(
            "{} Could not find questions file: {}",
            p_r("Error:"),
            cmd.file.display()
        );
        return Ok(());
    };

    if !global.is_silent() {
        aprintln!("{} {}", p_b("File:"), cmd.file.display());
    }

    load(config, global, items).await
}

/// Reads a questions file into template rows.
///
/// Returns `Ok(None)` when the file does not exist, so the caller can stop
/// before creating a client or writing anything.
pub fn load_questions_file(path: &Path) -> Result<Option<Vec<QuestionItem>>> {
    match read_questions_file(path) {
        Ok(questions) => Ok(Some(
            questions
                .into_records()
                .into_iter()
                .map(QuestionItem::from)
                .collect(),
        )),
        Err(QuestionFileError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

async fn load(config: &LoaderConfig, global: &Global, items: Vec<QuestionItem>) -> Result<()> {
    if !global.is_silent() {
        if config.dry_run {
            aprintln!("{} {}", p_b("Target:"), p_y("dry run (nothing is written)"));
        } else {
            aprintln!("{} {}", p_b("Target:"), config.aws.target_display());
        }
        aprintln!("{} {}", p_b("Table:"), config.table_name);
        aprintln!("{} {}", p_b("Questions:"), items.len());
        aprintln!();
    }

    let summary = if config.dry_run {
        let store = InMemoryQuestionStore::new(&config.table_name);
        let summary = write_all(&store, items).await?;
        for item in store.items().await {
            aprintln!("{}", serde_json::to_string(&item)?);
        }
        summary
    } else {
        let client = create_client(&config.aws).await;
        let store = DynamoDbQuestionStore::new(client, &config.table_name);
        write_all(&store, items).await?
    };

    if !global.is_silent() {
        aprintln!(
            "{} {} questions written to {}.",
            p_g("Insertion completed successfully."),
            summary.inserted,
            summary.table_name
        );
    }

    Ok(())
}

/// Writes `items` to `store` in order, stopping at the first failure.
pub async fn write_all<S: QuestionStore>(
    store: &S,
    items: Vec<QuestionItem>,
) -> Result<InsertSummary> {
    let summary = insert_questions(store, items).await?;
    Ok(summary)
}
