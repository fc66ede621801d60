use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use trivia_db::repositories::{category, question};

use crate::{
    ApiState,
    error::ApiError,
    pagination::{PageQuery, paginate},
};

use super::model::{CreateQuestion, SearchRequest};

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}

/// One page of all questions, plus the category names for the client's filter UI.
async fn list_questions(
    State(state): State<ApiState>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let questions = question::list_all(&state.pool).await?;
    let categories = category::list_all(&state.pool).await?;

    let page_items = paginate(&questions, page.unwrap_or(1));
    let category_names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

    Ok(Json(json!({
        "questions": page_items,
        "total_questions": questions.len(),
        "categories": category_names,
    })))
}

async fn create_question(
    State(state): State<ApiState>,
    payload: Option<Json<CreateQuestion>>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(Json(payload)) = payload else {
        return Err(ApiError::Unprocessable("missing request body".to_string()));
    };

    let new = payload.validate()?;
    let id = question::create(
        &state.pool,
        &new.question,
        &new.answer,
        new.category,
        new.difficulty,
    )
    .await?;
    tracing::info!(question_id = id, "question created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "New Question has been added.",
        })),
    ))
}

async fn delete_question(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = question::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }
    tracing::info!(question_id = id, "question deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Question deleted successfully.",
    })))
}

/// All questions whose prompt contains the search term, case-insensitively.
async fn search_questions(
    State(state): State<ApiState>,
    payload: Option<Json<SearchRequest>>,
) -> Result<Json<Value>, ApiError> {
    let term = payload
        .map(|Json(p)| p.validate())
        .unwrap_or_else(|| Err(ApiError::Unprocessable("missing request body".to_string())))?;

    let questions = question::search(&state.pool, &term).await?;
    let total = questions.len();

    Ok(Json(json!({
        "questions": questions,
        "total_questions": total,
    })))
}
