//! Request extractors for the recipe routes.
//!
//! `JsonBody` decodes the raw body regardless of `Content-Type`; any decode
//! failure becomes `ApiError::BadRequest` with serde's message, so clients
//! always get a 400 with `{"error": ...}` instead of axum's plain-text
//! 415/422 rejections. `RecipeId` turns an undecodable `{id}` segment into the
//! same 404 an unknown id gets.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{ApiError, RECIPE_NOT_FOUND};

#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// The `{id}` path segment of `/recipes/{id}`.
#[derive(Debug, Clone)]
pub struct RecipeId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 无法解码的 id 不可能对应任何已存储的记录，按不存在处理
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| RecipeId(id))
            .map_err(|e| {
                debug!(error = %e.body_text(), "undecodable recipe id");
                ApiError::NotFound(RECIPE_NOT_FOUND.into())
            })
    }
}
