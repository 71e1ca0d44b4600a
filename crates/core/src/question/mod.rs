//! Question types and the questions file parser.

mod error;
mod parser;
mod types;

pub use error::{QuestionFileError, Result};
pub use parser::{parent_id, parse_line, parse_questions, read_questions_file, ParsedLine};
pub use types::{
    default_questions, numbered_questions, Question, QuestionItem, QuestionRecord, QuestionSet,
    SubQuestion, TEMPLATE_SESSION_ID, TRIGGER_ON_RESPONSE,
};
