//! Question to DynamoDB item conversions.
//!
//! Pure functions, testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use interview_core::question::{
    Question, QuestionItem, QuestionRecord, SubQuestion, TRIGGER_ON_RESPONSE,
};

pub const ATTR_QUESTION_ID: &str = "questionId";
pub const ATTR_SESSION_ID: &str = "sessionId";
pub const ATTR_QUESTION: &str = "question";
pub const ATTR_HAS_SUB_QUESTIONS: &str = "hasSubQuestions";
pub const ATTR_TRIGGER_ON_RESPONSE: &str = "triggerOnResponse";
pub const ATTR_SUB_QUESTIONS: &str = "subQuestions";
pub const ATTR_SUB_QUESTION_ID: &str = "subQuestionId";

/// A DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

/// Convert any question row to its DynamoDB item.
pub fn item_for(item: &QuestionItem) -> Item {
    match item {
        QuestionItem::Flat(question) => question_to_item(question),
        QuestionItem::Template(record) => record_to_item(record),
    }
}

/// Convert a numbered question to a DynamoDB item.
pub fn question_to_item(question: &Question) -> Item {
    let mut item = HashMap::new();

    item.insert(
        ATTR_QUESTION_ID.to_string(),
        AttributeValue::S(question.question_id.clone()),
    );
    item.insert(
        ATTR_SESSION_ID.to_string(),
        AttributeValue::S(question.session_id.clone()),
    );
    item.insert(
        ATTR_QUESTION.to_string(),
        AttributeValue::S(question.question.clone()),
    );

    item
}

/// Convert a template question record to a DynamoDB item.
///
/// Sub-questions and the trigger marker are only written when the record
/// has sub-questions.
pub fn record_to_item(record: &QuestionRecord) -> Item {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        ATTR_SESSION_ID.to_string(),
        AttributeValue::S(record.session_id().to_string()),
    );
    item.insert(
        ATTR_QUESTION_ID.to_string(),
        AttributeValue::S(record.question_id().to_string()),
    );

    item.insert(
        ATTR_QUESTION.to_string(),
        AttributeValue::S(record.question().to_string()),
    );
    item.insert(
        ATTR_HAS_SUB_QUESTIONS.to_string(),
        AttributeValue::Bool(record.has_sub_questions()),
    );

    if record.has_sub_questions() {
        item.insert(
            ATTR_TRIGGER_ON_RESPONSE.to_string(),
            AttributeValue::S(TRIGGER_ON_RESPONSE.to_string()),
        );
        item.insert(
            ATTR_SUB_QUESTIONS.to_string(),
            AttributeValue::L(
                record
                    .sub_questions()
                    .iter()
                    .map(sub_question_to_attribute)
                    .collect(),
            ),
        );
    }

    item
}

fn sub_question_to_attribute(sub_question: &SubQuestion) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        (
            ATTR_SUB_QUESTION_ID.to_string(),
            AttributeValue::S(sub_question.sub_question_id.clone()),
        ),
        (
            ATTR_QUESTION.to_string(),
            AttributeValue::S(sub_question.question.clone()),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::question::{default_questions, parse_questions};

    fn get_s<'a>(item: &'a Item, key: &str) -> &'a str {
        item.get(key).unwrap().as_s().unwrap()
    }

    #[test]
    fn test_flat_items_use_sequence_keys() {
        let items: Vec<_> = default_questions().iter().map(question_to_item).collect();

        assert_eq!(get_s(&items[0], ATTR_QUESTION_ID), "1");
        assert_eq!(get_s(&items[0], ATTR_SESSION_ID), "1");
        assert_eq!(
            get_s(&items[0], ATTR_QUESTION),
            "Are you a citizen of the United States?"
        );
        assert_eq!(get_s(&items[1], ATTR_QUESTION_ID), "2");
        assert_eq!(get_s(&items[1], ATTR_SESSION_ID), "2");

        for item in &items {
            assert_eq!(item.len(), 3);
            assert!(!item.contains_key(ATTR_HAS_SUB_QUESTIONS));
            assert!(!item.contains_key(ATTR_SUB_QUESTIONS));
        }
    }

    #[test]
    fn test_record_with_sub_questions() {
        let questions = parse_questions("Q|1|Do you smoke?\nSQ|1.1|How many years?");
        let item = record_to_item(questions.get("1").unwrap());

        assert_eq!(get_s(&item, ATTR_SESSION_ID), "TEMPLATE");
        assert_eq!(get_s(&item, ATTR_QUESTION_ID), "1");
        assert_eq!(get_s(&item, ATTR_QUESTION), "Do you smoke?");
        assert_eq!(item.get(ATTR_HAS_SUB_QUESTIONS).unwrap().as_bool(), Ok(&true));
        assert_eq!(get_s(&item, ATTR_TRIGGER_ON_RESPONSE), "YES");

        let subs = item.get(ATTR_SUB_QUESTIONS).unwrap().as_l().unwrap();
        assert_eq!(subs.len(), 1);
        let sub = subs[0].as_m().unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.get(ATTR_SUB_QUESTION_ID).unwrap().as_s().unwrap(), "1.1");
        assert_eq!(
            sub.get(ATTR_QUESTION).unwrap().as_s().unwrap(),
            "How many years?"
        );
    }

    #[test]
    fn test_record_without_sub_questions_omits_list_and_marker() {
        let questions = parse_questions("Q|2|Are you a citizen?");
        let item = record_to_item(questions.get("2").unwrap());

        assert_eq!(item.get(ATTR_HAS_SUB_QUESTIONS).unwrap().as_bool(), Ok(&false));
        assert!(!item.contains_key(ATTR_SUB_QUESTIONS));
        assert!(!item.contains_key(ATTR_TRIGGER_ON_RESPONSE));
        assert_eq!(item.len(), 4);
    }

    #[test]
    fn test_sub_questions_keep_file_order() {
        let questions = parse_questions("Q|1|A\nSQ|1.2|second\nSQ|1.1|first");
        let item = record_to_item(questions.get("1").unwrap());

        let ids: Vec<_> = item
            .get(ATTR_SUB_QUESTIONS)
            .unwrap()
            .as_l()
            .unwrap()
            .iter()
            .map(|sub| {
                sub.as_m()
                    .unwrap()
                    .get(ATTR_SUB_QUESTION_ID)
                    .unwrap()
                    .as_s()
                    .unwrap()
                    .clone()
            })
            .collect();
        assert_eq!(ids, vec!["1.2", "1.1"]);
    }

    #[test]
    fn test_item_for_dispatches() {
        let flat = QuestionItem::Flat(Question::numbered(1, "Flat?"));
        assert_eq!(item_for(&flat).len(), 3);

        let template = QuestionItem::Template(QuestionRecord::new("1", "Template?"));
        assert_eq!(get_s(&item_for(&template), ATTR_SESSION_ID), "TEMPLATE");
    }
}
