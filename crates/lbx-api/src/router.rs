use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};

use crate::{flashcard, middleware::request_id::request_id_middleware, state::ApiState, study};

pub fn router() -> Router<ApiState> {
    let api = Router::new().merge(flashcard::routes()).merge(study::routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn(request_id_middleware))
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
