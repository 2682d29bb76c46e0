use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may GET; OPTIONS preflights are answered here and go no further.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
