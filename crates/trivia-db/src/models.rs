use serde::{Deserialize, Serialize};

/// Category model - a labeled grouping for questions
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Display name (e.g. "Science", "History")
    pub name: String,
}

/// Question model - a trivia prompt with its answer
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Unique question identifier
    pub id: i64,
    /// The prompt text
    pub question: String,
    /// The answer text
    pub answer: String,
    /// Category this question belongs to (foreign key by id)
    pub category: i64,
    /// Difficulty rating
    pub difficulty: i64,
}
