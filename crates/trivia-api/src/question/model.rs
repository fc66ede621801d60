use serde::Deserialize;

use crate::error::ApiError;

/// Incoming payload for question creation.
///
/// Every field is optional at the wire level so that a missing field surfaces
/// as a validation failure instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// A fully validated question, ready to persist.
#[derive(Debug)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl CreateQuestion {
    /// Require all four fields; text fields must be non-blank.
    pub fn validate(self) -> Result<NewQuestion, ApiError> {
        let question = require_text("question", self.question)?;
        let answer = require_text("answer", self.answer)?;
        let difficulty = require_field("difficulty", self.difficulty)?;
        let category = require_field("category", self.category)?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

/// Incoming payload for question search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub search_term: Option<String>,
}

impl SearchRequest {
    pub fn validate(self) -> Result<String, ApiError> {
        require_text("search_term", self.search_term)
    }
}

fn require_text(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing(field)),
    }
}

fn require_field<T>(field: &str, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> ApiError {
    ApiError::Unprocessable(format!("missing or empty field: {field}"))
}
