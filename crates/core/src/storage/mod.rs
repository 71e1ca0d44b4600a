mod error;
mod inmemory;
mod traits;

pub use error::{Result, StoreError};
pub use inmemory::InMemoryQuestionStore;
pub use traits::QuestionStore;
