use std::collections::HashMap;

use serde::Serialize;

/// Session id shared by every template row written from a questions file.
pub const TEMPLATE_SESSION_ID: &str = "TEMPLATE";

/// Marker stored on template rows whose sub-questions are asked after a "yes".
pub const TRIGGER_ON_RESPONSE: &str = "YES";

/// A standalone question row keyed by its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub session_id: String,
    pub question: String,
}

impl Question {
    /// Creates the row for the `sequence`-th question (1-based).
    ///
    /// Both the question id and the session id are the sequence number.
    pub fn numbered(sequence: usize, question: impl Into<String>) -> Self {
        Self {
            question_id: sequence.to_string(),
            session_id: sequence.to_string(),
            question: question.into(),
        }
    }
}

/// Builds numbered rows from a list of question texts, starting at 1.
pub fn numbered_questions<I, S>(texts: I) -> Vec<Question>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Question::numbered(index + 1, text))
        .collect()
}

/// The built-in questions used by the flat loader.
pub fn default_questions() -> Vec<Question> {
    numbered_questions([
        "Are you a citizen of the United States?",
        "Do you desire Automatic Premium Loan Provision (if available)?",
    ])
}

/// A follow-up question embedded in its parent's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuestion {
    pub sub_question_id: String,
    pub question: String,
}

impl SubQuestion {
    pub fn new(sub_question_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            sub_question_id: sub_question_id.into(),
            question: question.into(),
        }
    }
}

/// A top-level question read from a questions file, with its sub-questions.
///
/// `has_sub_questions` is only ever set by [`QuestionRecord::push_sub_question`],
/// so it is true exactly when `sub_questions` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    question_id: String,
    question: String,
    has_sub_questions: bool,
    sub_questions: Vec<SubQuestion>,
}

impl QuestionRecord {
    /// Creates a record without sub-questions.
    pub fn new(question_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            question: question.into(),
            has_sub_questions: false,
            sub_questions: Vec::new(),
        }
    }

    /// Appends a sub-question in file order.
    pub fn push_sub_question(&mut self, sub_question: SubQuestion) {
        self.sub_questions.push(sub_question);
        self.has_sub_questions = true;
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn has_sub_questions(&self) -> bool {
        self.has_sub_questions
    }

    pub fn sub_questions(&self) -> &[SubQuestion] {
        &self.sub_questions
    }

    /// Template rows always share the same session id.
    pub fn session_id(&self) -> &'static str {
        TEMPLATE_SESSION_ID
    }
}

/// Top-level question records keyed by id, in the order their ids first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    records: Vec<QuestionRecord>,
    positions: HashMap<String, usize>,
}

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same id in place.
    pub fn insert(&mut self, record: QuestionRecord) {
        match self.positions.get(record.question_id()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.positions
                    .insert(record.question_id().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&QuestionRecord> {
        self.positions
            .get(question_id)
            .map(|&position| &self.records[position])
    }

    pub fn get_mut(&mut self, question_id: &str) -> Option<&mut QuestionRecord> {
        match self.positions.get(question_id) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.positions.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }

    /// Consumes the set, yielding records in insertion order.
    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single row handed to a [`QuestionStore`](crate::storage::QuestionStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuestionItem {
    /// A numbered row from the flat loader.
    Flat(Question),
    /// A template row from a questions file.
    Template(QuestionRecord),
}

impl QuestionItem {
    pub fn question_id(&self) -> &str {
        match self {
            QuestionItem::Flat(question) => &question.question_id,
            QuestionItem::Template(record) => record.question_id(),
        }
    }

    pub fn session_id(&self) -> &str {
        match self {
            QuestionItem::Flat(question) => &question.session_id,
            QuestionItem::Template(record) => record.session_id(),
        }
    }

    pub fn question(&self) -> &str {
        match self {
            QuestionItem::Flat(question) => &question.question,
            QuestionItem::Template(record) => record.question(),
        }
    }
}

impl From<Question> for QuestionItem {
    fn from(question: Question) -> Self {
        QuestionItem::Flat(question)
    }
}

impl From<QuestionRecord> for QuestionItem {
    fn from(record: QuestionRecord) -> Self {
        QuestionItem::Template(record)
    }
}
