use tower_http::trace::TraceLayer;
use trivia_api::{config::ApiConfig, middleware::cors::create_cors_layer, state::ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;
    trivia_api::tracing::init_tracing(&config.env);

    // Connect and bring the schema up to date
    let pool = trivia_db::create_pool(&config.database_url).await?;
    trivia_db::migrate(&pool).await?;

    // Create the application router
    let state = ApiState::new(pool);
    let app = trivia_api::router::router()
        .with_state(state)
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
