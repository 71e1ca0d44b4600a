//! interview_core - question parsing and insertion for interview question tables.
//!
//! Everything here is storage-agnostic. The DynamoDB backend lives in the
//! `question_loader` crate and plugs in through [`storage::QuestionStore`].

pub mod insert;
pub mod question;
pub mod storage;
