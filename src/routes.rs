use crate::{handlers, middleware as mw, AppState};
use axum::{middleware, routing::get, Router};

/// Layers on the code routes run outside-in: CORS, auth, timing.
pub fn build_router(state: AppState) -> Router {
    let codes = Router::new()
        .route("/codes/:code_type", get(handlers::codes::list_codes))
        .route("/codes/:code_type/:code", get(handlers::codes::get_code))
        .route_layer(middleware::from_fn(mw::profile_time))
        .route_layer(middleware::from_fn_with_state(state.clone(), mw::require));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(codes)
        .layer(mw::cors_layer())
        .with_state(state)
}
