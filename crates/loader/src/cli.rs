//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_QUESTIONS_FILE, DEFAULT_REGION, DEFAULT_TABLE_NAME};

/// Insert interview questions into a DynamoDB table.
#[derive(Debug, Parser)]
#[command(name = "question-loader")]
#[command(version, about = "Insert interview questions into DynamoDB", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// AWS region name.
    #[arg(long, global = true, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// DynamoDB table name.
    #[arg(long, global = true, env = "QUESTIONS_TABLE", default_value = DEFAULT_TABLE_NAME)]
    pub table: String,

    /// Custom DynamoDB endpoint (e.g. http://localhost:8000 for DynamoDB Local).
    #[arg(long, global = true, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Print the rows that would be written instead of writing them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Silence the command output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert the built-in list of questions, one row per question.
    Flat,

    /// Insert questions and sub-questions read from a file.
    Structured(StructuredCommand),
}

/// Insert template questions from a pipe-delimited file.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Insert template questions from a pipe-delimited file.

Each line is TYPE|ID|TEXT. Q lines are top-level questions; SQ lines are
follow-up questions whose id starts with the parent id and a dot:

  Q|1|Do you smoke?
  SQ|1.1|How many years?

Malformed lines and sub-questions without a preceding parent are ignored.
Every row is written with sessionId TEMPLATE.")]
pub struct StructuredCommand {
    /// Input file containing questions.
    #[arg(long, default_value = DEFAULT_QUESTIONS_FILE)]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_file_flag() {
        let cli =
            Cli::try_parse_from(["question-loader", "structured", "--file", "interview.txt"])
                .unwrap();

        match cli.command {
            Commands::Structured(cmd) => assert_eq!(cmd.file, PathBuf::from("interview.txt")),
            Commands::Flat => panic!("expected structured command"),
        }
    }

    #[test]
    fn test_structured_default_file() {
        let cli = Cli::try_parse_from(["question-loader", "structured"]).unwrap();

        match cli.command {
            Commands::Structured(cmd) => assert_eq!(cmd.file, PathBuf::from("questions.txt")),
            Commands::Flat => panic!("expected structured command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["question-loader", "flat", "--table", "Other", "--silent"])
                .unwrap();

        assert_eq!(cli.global.table, "Other");
        assert!(cli.global.is_silent());
        assert!(!cli.global.is_verbose());
    }

    #[test]
    fn test_silent_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["question-loader", "--silent", "--verbose", "flat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["question-loader", "nested"]).is_err());
    }
}
