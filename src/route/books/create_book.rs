use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    book::{Book, NewBook},
    error::ApiError,
    extractor::json::ApiJson,
    server_error,
    state::ApiState,
};

#[derive(Debug)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.book)).into_response()
    }
}

pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(new_book): ApiJson<NewBook>,
) -> Result<CreateBookResponse, ApiError> {
    let book = state
        .store()
        .create(new_book)
        .await
        .map_err(server_error!(state))?;

    tracing::info!(id = book.id, "Book created");

    Ok(CreateBookResponse { book })
}
