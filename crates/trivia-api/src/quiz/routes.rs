use axum::{Json, Router, extract::State, routing::post};
use rand::seq::IteratorRandom;
use serde::Deserialize;
use serde_json::{Value, json};
use trivia_db::{models::Question, repositories::question};

use crate::{ApiState, error::ApiError};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", post(play_quiz))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizRequest {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct QuizCategory {
    id: i64,
}

/// Serve one random question from the category that the caller has not seen
/// yet. When every question in the category has been asked, `question` is
/// null and the client knows the quiz is over.
async fn play_quiz(
    State(state): State<ApiState>,
    payload: Option<Json<QuizRequest>>,
) -> Result<Json<Value>, ApiError> {
    let Some(Json(payload)) = payload else {
        return Err(ApiError::Unprocessable("missing request body".to_string()));
    };

    let questions = question::list_by_category(&state.pool, payload.quiz_category.id).await?;
    let next = pick_unseen(questions, &payload.previous_questions);

    Ok(Json(json!({
        "question": next,
        "success": true,
    })))
}

/// Pick uniformly at random from the eligible set: questions not present in
/// the caller's previously-asked id list. Returns `None` when the set is
/// empty, so exhaustion is a value rather than an error path.
fn pick_unseen(questions: Vec<Question>, previous: &[i64]) -> Option<Question> {
    questions
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .choose(&mut rand::thread_rng())
}
