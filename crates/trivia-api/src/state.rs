use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

impl ApiState {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
