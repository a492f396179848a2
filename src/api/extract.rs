//! Request extractors

use crate::error::{AppError, Result};
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// JSON body whose parse outcome is deferred to the handler.
///
/// Unlike [`Json`], this never rejects the request. Handlers can check that the
/// addressed record exists before reporting a malformed body.
pub struct Payload<T>(pub Result<T>);

impl<T> Payload<T> {
    pub fn into_inner(self) -> Result<T> {
        self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let parsed = match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(value),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        };
        Ok(Self(parsed))
    }
}

/// Parse a path segment as a record id from its leading digits, so `7abc` and `7.5`
/// both address record 7. Segments without leading digits can never match a record.
pub fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
