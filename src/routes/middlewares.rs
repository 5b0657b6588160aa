use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::models::{Error, Permission, TokenClaim};
use crate::AppState;

/// Validates the `Authorization: Bearer` header and attaches the decoded
/// claims to the request for downstream handlers.
/// Usage: `.route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))`
pub async fn auth_guard(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::TokenMissing)?;

    let token = header.strip_prefix("Bearer ").ok_or(Error::TokenMissing)?;

    let claims = match TokenClaim::verify(token, &state.config.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => {
            warn!(uri = %req.uri(), "token verification failed");
            return Err(err);
        }
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Rejects requests whose authenticated role is not granted `permission` by
/// the table in [`crate::models::permissions`]. Must run after [`auth_guard`];
/// a request that reaches it without claims is unauthenticated.
/// Usage:
/// `.route_layer(middleware::from_fn(move |req: Request, next: Next| require_permission(permission, req, next)))`
pub async fn require_permission(
    permission: Permission,
    req: Request,
    next: Next,
) -> Result<Response, Error> {
    let claims = req
        .extensions()
        .get::<TokenClaim>()
        .ok_or(Error::Unauthenticated)?;

    if !claims.role.allows(permission) {
        warn!(role = %claims.role, ?permission, "permission denied");
        return Err(Error::PermissionDenied);
    }

    Ok(next.run(req).await)
}
