//! Parser for pipe-delimited questions files.
//!
//! Each line has the shape `TYPE|ID|TEXT`. Only the first two `|` separate
//! fields, so the text may contain further pipes. `Q` lines start a top-level
//! question and `SQ` lines attach a follow-up to the question named by the
//! part of their id before the first `.`.
//!
//! Lines that don't fit are ignored: blank lines, lines with fewer than three
//! fields, unknown type tags, and sub-questions whose parent has not been
//! seen yet.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::{QuestionFileError, Result};
use super::types::{QuestionRecord, QuestionSet, SubQuestion};

/// One classified line of a questions file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// `Q|ID|TEXT`
    Question { id: &'a str, text: &'a str },
    /// `SQ|ID|TEXT`
    SubQuestion { id: &'a str, text: &'a str },
}

/// Classifies a single line, returning `None` for anything that is not a
/// well-formed `Q` or `SQ` record.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut fields = line.splitn(3, '|');
    let (kind, id, text) = (fields.next()?, fields.next()?, fields.next()?);

    match kind {
        "Q" => Some(ParsedLine::Question { id, text }),
        "SQ" => Some(ParsedLine::SubQuestion { id, text }),
        _ => None,
    }
}

/// Returns the id of the question a sub-question belongs to.
///
/// This is everything before the first `.`, or the whole id when it has none.
pub fn parent_id(sub_question_id: &str) -> &str {
    sub_question_id
        .split_once('.')
        .map_or(sub_question_id, |(parent, _)| parent)
}

/// Parses the contents of a questions file.
pub fn parse_questions(input: &str) -> QuestionSet {
    let mut questions = QuestionSet::new();
    let mut current: Option<&str> = None;

    for (index, line) in input.lines().enumerate() {
        let Some(parsed) = parse_line(line) else {
            if !line.trim().is_empty() {
                tracing::debug!(line = index + 1, "skipping malformed line");
            }
            continue;
        };

        match parsed {
            ParsedLine::Question { id, text } => {
                questions.insert(QuestionRecord::new(id, text));
                current = Some(id);
            }
            ParsedLine::SubQuestion { id, text } => {
                if current.is_none() {
                    tracing::debug!(line = index + 1, id, "sub-question before any question");
                    continue;
                }

                match questions.get_mut(parent_id(id)) {
                    Some(parent) => parent.push_sub_question(SubQuestion::new(id, text)),
                    None => {
                        tracing::debug!(line = index + 1, id, "dropping sub-question without parent")
                    }
                }
            }
        }
    }

    questions
}

/// Reads and parses a UTF-8 questions file.
///
/// A missing file is reported as [`QuestionFileError::NotFound`] so callers can
/// stop before touching the store.
pub fn read_questions_file(path: impl AsRef<Path>) -> Result<QuestionSet> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => QuestionFileError::NotFound {
            path: path.to_path_buf(),
        },
        _ => QuestionFileError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let questions = parse_questions(&contents);
    tracing::debug!(
        path = %path.display(),
        count = questions.len(),
        "parsed questions file"
    );

    Ok(questions)
}
