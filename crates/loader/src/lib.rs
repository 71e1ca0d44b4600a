//! question_loader - insert interview questions into DynamoDB.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dynamodb;
pub mod error;
pub mod prelude;
pub mod telemetry;

pub use error::{LoaderError, Result};
