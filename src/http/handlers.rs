//! Route handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::http::request::CreateUserRequest;
use crate::http::response::{ApiError, MessageResponse};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /ping`
pub async fn ping() -> &'static str {
    "pong"
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.list())
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    request: CreateUserRequest,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    match state.registry.create(request.name.as_deref()) {
        Ok(name) => {
            tracing::info!(name = %name, "User created");
            metrics::record_user_created();
            Ok((StatusCode::CREATED, Json(MessageResponse::user_created(&name))))
        }
        Err(e) => {
            tracing::warn!(reason = e.reason(), name = ?request.name, "User rejected");
            metrics::record_user_rejected(e.reason());
            Err(e.into())
        }
    }
}
