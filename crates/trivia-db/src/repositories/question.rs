use sqlx::{Executor, Sqlite};

use crate::models::Question;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_by_category<'e, E>(
    executor: E,
    category_id: i64,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?1
            ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(executor)
    .await
}

/// Case-insensitive substring match against the prompt text.
pub async fn search<'e, E>(executor: E, term: &str) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE instr(lower(question), lower(?1)) > 0
            ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(executor)
    .await
}

pub async fn create<'e, E>(
    executor: E,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a question by id, returning the number of rows removed.
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
            DELETE FROM questions
            WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
