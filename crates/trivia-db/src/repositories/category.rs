use sqlx::{Executor, Sqlite};

use crate::models::Category;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Category>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, name
            FROM categories
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Category>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        r#"
            SELECT id, name
            FROM categories
            WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
