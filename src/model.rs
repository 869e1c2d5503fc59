//! Stored entities and the request bodies that reach them.

use crate::deserializers::{deserialize_option_i64_from_number_or_string, deserialize_present};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Category id to display name, iterated (and serialized) in id order.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// A question that passed validation and is ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Raw body of `POST /questions`. Every field is optional here so validation
/// can report all missing ones at once.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64_from_number_or_string")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64_from_number_or_string")]
    pub category: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchRequest {
    /// `Some(None)` when the key is sent as `null`.
    #[serde(default, rename = "searchTerm", deserialize_with = "deserialize_present")]
    pub search_term: Option<Option<String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuizCategoryRequest {
    #[serde(default, deserialize_with = "deserialize_option_i64_from_number_or_string")]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryRequest>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_serializes_in_id_order() {
        let map = category_map(vec![
            Category { id: 10, kind: "Music".into() },
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"Science","2":"Art","10":"Music"}"#);
    }

    #[test]
    fn question_serializes_flat() {
        let q = Question {
            id: 4,
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            category: 4,
            difficulty: 2,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["answer"], "Maya Angelou");
        assert_eq!(json["difficulty"], 2);
    }

    #[test]
    fn quiz_body_accepts_string_category_id() {
        let body: QuizRequest = serde_json::from_str(
            r#"{"quiz_category":{"type":"Science","id":"1"},"previous_questions":[20,21]}"#,
        )
        .unwrap();
        let category = body.quiz_category.unwrap();
        assert_eq!(category.id, Some(1));
        assert_eq!(category.kind.as_deref(), Some("Science"));
        assert_eq!(body.previous_questions, Some(vec![20, 21]));
    }

    #[test]
    fn missing_fields_decode_as_none() {
        let body: NewQuestionRequest = serde_json::from_str(r#"{"question":"Q?"}"#).unwrap();
        assert_eq!(body.question.as_deref(), Some("Q?"));
        assert!(body.answer.is_none());
        assert!(body.difficulty.is_none());
        assert!(body.category.is_none());
    }
}
