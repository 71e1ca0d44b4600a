//! DynamoDB storage backend.

mod client;
pub mod conversions;
mod error;
mod store;

pub use client::create_client;
pub use store::DynamoDbQuestionStore;
