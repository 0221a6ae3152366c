use super::permissions::check_permissions;
use super::verifier::TokenVerifier;
use super::AuthError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::{debug, warn};

/// Middleware state: the application state plus the permission a route requires.
///
/// ```ignore
/// post(create_drink).route_layer(middleware::from_fn_with_state(
///     RequiredPermission::new(&state, POST_DRINKS),
///     authorize,
/// ))
/// ```
#[derive(Clone)]
pub struct RequiredPermission {
    state: AppState,
    permission: &'static str,
}

impl RequiredPermission {
    pub fn new(state: &AppState, permission: &'static str) -> Self {
        Self {
            state: state.clone(),
            permission,
        }
    }
}

/// Admits only callers whose token grants the required permission.
///
/// Verified claims are added to the request extensions for the handler.
pub async fn authorize(
    State(required): State<RequiredPermission>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    // owned: the request body is not Sync, so no borrow of the request may cross an await
    let token = match TokenVerifier::extract_bearer(request.headers()) {
        Ok(token) => token.to_owned(),
        Err(e) => {
            warn!(
                "Rejected {} {}: {}",
                request.method(),
                request.uri().path(),
                e
            );
            return Err(e);
        }
    };

    let claims = required
        .state
        .verifier
        .verify(&token)
        .await
        .and_then(|claims| check_permissions(required.permission, claims))
        .inspect_err(|e| {
            warn!(
                "Rejected {} {} requiring '{}': {}",
                request.method(),
                request.uri().path(),
                required.permission,
                e
            );
        })?;

    debug!("Granted '{}' to {}", required.permission, claims.subject());
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
