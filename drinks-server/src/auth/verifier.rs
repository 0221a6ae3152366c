use super::jwks::{JwksClient, JwksError};
use super::{AuthError, Claims};
use crate::config::AuthConfig;
use http::HeaderMap;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use log::{debug, warn};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a verifier from configuration
#[derive(Debug, Error)]
pub enum VerifierSetupError {
    #[error("Unsupported signing algorithm: {0}")]
    Algorithm(String),
    #[error(transparent)]
    Jwks(#[from] JwksError),
}

/// Validates bearer tokens against the identity provider's signing keys
#[derive(Clone)]
pub struct TokenVerifier {
    jwks: JwksClient,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Result<Self, VerifierSetupError> {
        let algorithm = Algorithm::from_str(&config.algorithm)
            .map_err(|_| VerifierSetupError::Algorithm(config.algorithm.clone()))?;

        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_issuer(&[config.issuer()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = config.leeway;

        Ok(Self {
            jwks: JwksClient::new(config)?,
            validation,
        })
    }

    /// Pulls the raw token out of an `Authorization: Bearer <token>` header
    pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
        let header = headers
            .get(http::header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader("Authorization header is expected."))?
            .to_str()
            .map_err(|_| AuthError::MissingHeader("Authorization header must be bearer token."))?;

        let parts: Vec<&str> = header.split(' ').collect();
        match parts.as_slice() {
            ["Bearer", ""] => Err(AuthError::MissingHeader(
                "Authorization header must be bearer token.",
            )),
            ["Bearer", token] => Ok(*token),
            [_, _] => Err(AuthError::MissingHeader(
                "Authorization header must start with \"Bearer\".",
            )),
            _ => Err(AuthError::MissingHeader(
                "Authorization header must be bearer token.",
            )),
        }
    }

    /// Verifies signature, issuer, audience and expiry of `token`
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = jsonwebtoken::decode_header(token).map_err(|e| {
            debug!("Unparseable token header: {}", e);
            AuthError::InvalidHeader("Unable to parse authentication token.")
        })?;
        let kid = header
            .kid
            .ok_or(AuthError::InvalidHeader("Authorization malformed."))?;

        let key_set = self.jwks.key_set().await.map_err(|e| {
            warn!("Signing keys unavailable: {}", e);
            AuthError::KeysUnavailable(e.to_string())
        })?;
        let jwk = key_set.find(&kid).ok_or_else(|| {
            debug!("No signing key with kid '{}'", kid);
            AuthError::InvalidKey
        })?;
        let key = DecodingKey::from_jwk(jwk).map_err(|e| {
            warn!("Signing key '{}' is unusable: {}", kid, e);
            AuthError::InvalidKey
        })?;

        let token = jsonwebtoken::decode::<Claims>(token, &key, &self.validation).map_err(|e| {
            debug!("Token rejected: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims(
                    "Incorrect claims. Please, check the audience and issuer.",
                ),
                _ => AuthError::InvalidHeader("Unable to parse authentication token."),
            }
        })?;
        Ok(token.claims)
    }
}
