//! Sequential insertion of question rows.
//!
//! Rows are written one at a time in the order given. The first failed write
//! stops the run: rows written before it stay in place and later rows are
//! never attempted.

use thiserror::Error;

use crate::question::QuestionItem;
use crate::storage::{QuestionStore, StoreError};

/// A failed write, with the row that caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error inserting question {question_id}: {source}")]
pub struct InsertError {
    pub question_id: String,
    pub question: String,
    #[source]
    pub source: StoreError,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertSummary {
    pub table_name: String,
    pub inserted: usize,
}

/// Writes every item to `store`, stopping at the first failure.
pub async fn insert_questions<S, I>(store: &S, items: I) -> Result<InsertSummary, InsertError>
where
    S: QuestionStore + ?Sized,
    I: IntoIterator<Item = QuestionItem>,
{
    let mut inserted = 0;

    for item in items {
        if let Err(source) = store.put_question(&item).await {
            tracing::error!(
                question_id = item.question_id(),
                question = item.question(),
                error = %source,
                "Error inserting question"
            );
            return Err(InsertError {
                question_id: item.question_id().to_string(),
                question: item.question().to_string(),
                source,
            });
        }

        tracing::info!(
            "Inserted question {}: {}",
            item.question_id(),
            item.question()
        );
        inserted += 1;
    }

    Ok(InsertSummary {
        table_name: store.table_name().to_string(),
        inserted,
    })
}
