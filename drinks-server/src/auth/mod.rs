//! Bearer token verification and permission enforcement.
//!
//! A request for a protected route goes through [`middleware::authorize`],
//! which pulls the token out of the `Authorization` header, verifies it with
//! the [`verifier::TokenVerifier`] against the identity provider's key set
//! and finally checks the route's required permission with
//! [`permissions::check_permissions`].

pub mod jwks;
pub mod middleware;
pub mod permissions;
pub mod verifier;

use crate::errors::ApiError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub(crate) const POST_DRINKS: &str = "post:drinks";
pub(crate) const PATCH_DRINKS: &str = "patch:drinks";
pub(crate) const DELETE_DRINKS: &str = "delete:drinks";

/// Reasons a request is refused by the authorization layer
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    #[error("{0}")]
    MissingHeader(&'static str),
    #[error("{0}")]
    InvalidHeader(&'static str),
    #[error("Unable to find the appropriate key.")]
    InvalidKey,
    #[error("Token expired.")]
    TokenExpired,
    #[error("{0}")]
    InvalidClaims(&'static str),
    #[error("Permission not found.")]
    Unauthorized,
    #[error("Signing keys unavailable: {0}")]
    KeysUnavailable(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingHeader(_) | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::InvalidHeader(_) | AuthError::InvalidKey | AuthError::InvalidClaims(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Unauthorized => StatusCode::FORBIDDEN,
            AuthError::KeysUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // upstream detail stays in the logs
            AuthError::KeysUnavailable(_) => ApiError::internal(),
            err => ApiError::new(err.to_string(), err.status_code()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

/// `aud` may be a single string or a list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Claims of a verified access token.
///
/// Registered claims are defaulted here because their presence is enforced
/// by the token validation, which reports it as a claims failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    #[serde(default)]
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default)]
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Granted permissions; absent when the API has RBAC claims disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// Subject for log lines
    pub fn subject(&self) -> &str {
        self.sub.as_deref().unwrap_or("<unknown>")
    }
}
