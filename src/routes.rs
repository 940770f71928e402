mod shifts;

use crate::{errors::AppError, state::AppState};
use axum::{
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::IntoResponse,
    routing::any,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/shifts", shifts::new())
        // "/shifts/" 的 id 段是空的, nest 對不到, 這裡攔下來
        .route("/shifts/", any(empty_shift_id))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            // pay attention that for some request types like posting content-type: application/json
            // it is required to add ".allow_headers([http::header::CONTENT_TYPE])"
            // or see this issue https://github.com/tokio-rs/axum/issues/849
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_origin(Any)
                .allow_headers([CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "api not found")
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn empty_shift_id() -> impl IntoResponse {
    AppError::InvalidShiftId
}
