//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `interview_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use interview_core::storage::StoreError;

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table_name: &str,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => StoreError::TableNotFound {
            table_name: table_name.to_string(),
        },
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Throttled("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::Throttled("Request limit exceeded".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::Validation("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::WriteFailed("Transaction conflict".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::WriteFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::WriteFailed(format!("PutItem failed: {:?}", err)),
    }
}
