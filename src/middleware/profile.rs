use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Times the wrapped handler and logs one line per request.
pub async fn profile_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let span = info_span!("request", request_id = %Uuid::new_v4());

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    span.in_scope(|| {
        info!(
            %method,
            %path,
            status = response.status().as_u16(),
            elapsed_ms,
            "request completed"
        );
    });
    response
}
