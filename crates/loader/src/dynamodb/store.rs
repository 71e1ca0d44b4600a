//! DynamoDB-backed question store.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use interview_core::question::QuestionItem;
use interview_core::storage::{QuestionStore, Result};

use super::conversions::item_for;
use super::error::map_put_item_error;

/// Writes question rows to a DynamoDB table with unconditional `PutItem` calls.
pub struct DynamoDbQuestionStore {
    client: Client,
    table_name: String,
}

impl DynamoDbQuestionStore {
    /// Creates a store for `table_name` using an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl QuestionStore for DynamoDbQuestionStore {
    async fn put_question(&self, item: &QuestionItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_for(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        Ok(())
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}
