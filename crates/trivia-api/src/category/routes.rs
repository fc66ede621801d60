use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde_json::{Value, json};
use trivia_db::repositories::{category, question};

use crate::{
    ApiState,
    error::ApiError,
    pagination::{PageQuery, paginate},
};

/// Create the category routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/category/{id}", get(questions_by_category))
}

/// List every category.
async fn list_categories(State(state): State<ApiState>) -> Result<Json<Value>, ApiError> {
    let categories = category::list_all(&state.pool).await?;
    let total = categories.len();

    Ok(Json(json!({
        "success": true,
        "categories": categories,
        "total_categories": total,
    })))
}

/// One page of the questions belonging to a category.
///
/// An unknown category id is a 404; a page past the end of a known category's
/// questions is an empty list with the real totals.
async fn questions_by_category(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let category = category::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = question::list_by_category(&state.pool, id).await?;
    let page_items = paginate(&questions, page.unwrap_or(1));

    Ok(Json(json!({
        "success": true,
        "questions": page_items,
        "total_questions": questions.len(),
        "current_category": category.name,
    })))
}
