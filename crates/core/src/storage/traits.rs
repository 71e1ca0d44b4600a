use async_trait::async_trait;

use crate::question::QuestionItem;

use super::Result;

/// A destination for question rows.
///
/// Writes are unconditional puts: writing an item whose
/// `(questionId, sessionId)` already exists replaces the stored row.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Writes a single question row.
    async fn put_question(&self, item: &QuestionItem) -> Result<()>;

    /// Name of the table being written, for reporting.
    fn table_name(&self) -> &str;
}
