use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde::Deserialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;
use trivia_api::{router, state::ApiState};

/// Build an app over a fresh in-memory database with migrations applied.
///
/// A single pooled connection keeps the in-memory database alive and shared
/// for the whole test.
pub async fn setup() -> (TestClient, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    trivia_db::migrate(&pool).await.expect("Failed to migrate");

    let app = router::router().with_state(ApiState::new(pool.clone()));
    (TestClient::new(app), pool)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with no body
    pub async fn post(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    /// Assert the fixed JSON error body used for every domain error
    pub fn assert_error_body(&self, status_code: u16, message: &str) {
        let json: serde_json::Value = self.json();
        assert_eq!(json["status_code"], status_code);
        assert_eq!(json["message"], message);
        assert_eq!(json["success"], false);
    }
}

/// Database test helper functions
pub mod db {
    use sqlx::SqlitePool;

    /// Insert a question directly, bypassing the API
    pub async fn create_question(
        pool: &SqlitePool,
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i64,
    ) -> i64 {
        trivia_db::repositories::question::create(pool, question, answer, category, difficulty)
            .await
            .expect("Failed to insert test question")
    }

    /// Insert `count` questions into a category, returning their ids
    pub async fn seed_questions(pool: &SqlitePool, category: i64, count: usize) -> Vec<i64> {
        let mut ids = Vec::with_capacity(count);
        for n in 0..count {
            let id = create_question(
                pool,
                &format!("Seed question {n}?"),
                &format!("Seed answer {n}"),
                category,
                1,
            )
            .await;
            ids.push(id);
        }
        ids
    }

    pub async fn count_questions(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
            .expect("Failed to count questions")
    }
}
