//! In-memory question store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::question::QuestionItem;

use super::{QuestionStore, Result};

/// Store that keeps rows in memory, in write order.
///
/// Used for dry runs and tests. A put with an existing key replaces the row
/// in place, mirroring a key-value put.
#[derive(Debug, Clone)]
pub struct InMemoryQuestionStore {
    table_name: String,
    items: Arc<RwLock<Vec<QuestionItem>>>,
}

impl InMemoryQuestionStore {
    /// Creates an empty store standing in for `table_name`.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns a snapshot of the stored rows.
    pub async fn items(&self) -> Vec<QuestionItem> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn put_question(&self, item: &QuestionItem) -> Result<()> {
        let mut items = self.items.write().await;
        let existing = items.iter_mut().find(|stored| {
            stored.question_id() == item.question_id() && stored.session_id() == item.session_id()
        });

        match existing {
            Some(stored) => *stored = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}
