use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// CORS layer permitting any origin.
///
/// Allowed methods and headers are advertised through the two distinct
/// `Access-Control-Allow-Methods` / `Access-Control-Allow-Headers` headers.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
