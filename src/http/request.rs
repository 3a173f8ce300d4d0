//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Decode the `POST /users` payload into a typed struct at the boundary

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::ApiError;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates `x-request-id` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Payload of `POST /users`.
///
/// A missing or null `name` decodes to `None` and is rejected by the registry,
/// not here. Only a JSON object has a `name` field; any other JSON value decodes
/// to an empty payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: Option<String>,
}

impl CreateUserRequest {
    /// Decode a JSON body. Fails on unparsable JSON or a non-string `name`.
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("Corpo da requisição inválido: {e}")))?;

        let name = match value {
            Value::Object(mut fields) => match fields.remove("name") {
                None | Some(Value::Null) => None,
                Some(Value::String(name)) => Some(name),
                Some(other) => {
                    return Err(ApiError::BadRequest(format!(
                        "Campo name deve ser texto, recebido {other}"
                    )))
                }
            },
            _ => None,
        };

        Ok(Self { name })
    }
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

impl<S> FromRequest<S> for CreateUserRequest
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(&request);
        let body = Bytes::from_request(request, state)
            .await
            .map_err(IntoResponse::into_response)?;

        // Bodies that are not JSON carry no name.
        if !json || body.is_empty() {
            return Ok(Self::default());
        }

        Self::from_json(&body).map_err(IntoResponse::into_response)
    }
}
