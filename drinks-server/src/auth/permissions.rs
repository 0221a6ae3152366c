use super::{AuthError, Claims};

/// Checks that `claims` grant `permission`.
///
/// Permissions are opaque strings compared for exact equality.
pub fn check_permissions(permission: &str, claims: Claims) -> Result<Claims, AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::InvalidClaims("Permissions not included in JWT."))?;

    if !granted.iter().any(|p| p == permission) {
        return Err(AuthError::Unauthorized);
    }
    Ok(claims)
}
