use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const GREETING: &str = "Hello from FastAPI backend!";

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: String,
}

impl IntoResponse for Greeting {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Health check. Never touches the store.
pub async fn greeting() -> Greeting {
    Greeting {
        message: GREETING.to_string(),
    }
}
