//! Request extractors for the plant routes

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// Lenient JSON body.
///
/// Does not require a `Content-Type` header. An empty body yields
/// `T::default()`; anything that does not parse into `T` is an
/// [`ApiError::InvalidBody`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned + Default,
{
    /// Parse a raw request body
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()))?;
        Self::parse(&bytes)
    }
}

/// Integer plant id from the `:id` path segment.
///
/// Only plain decimal digits match. Anything else is a bare 404, the same
/// as a path no route matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantId(pub i64);

impl PlantId {
    /// Parse a path segment
    pub fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse().ok().map(PlantId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PlantId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        Self::parse(&segment).ok_or(StatusCode::NOT_FOUND)
    }
}
