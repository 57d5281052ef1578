//! Authentication Middleware
//!
//! Identifies the signed-in user from a JWT, if any. The home feed is also
//! served to guests, so a missing or bad token never rejects the request;
//! the viewer resolver decides what to do with an anonymous caller.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, Cookie, HeaderMapExt};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::startup::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Authenticated user identity taken from a valid token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Request extension inserted on every request passing the middleware
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentUser(pub Option<AuthUser>);

impl CurrentUser {
    pub fn user_id(&self) -> Option<i64> {
        self.0.map(|u| u.user_id)
    }
}

/// Token from `Authorization: Bearer ...`, falling back to the session cookie.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }

    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(cookie_name).map(str::to_string))
}

/// Validate a token and return the user ID in its subject.
pub fn decode_user_id(token: &str, secret: &str) -> Option<i64> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| tracing::debug!(error = %e, "Rejected session token"))
    .ok()?;

    token_data.claims.sub.parse().ok()
}

/// Optional authentication middleware (doesn't fail if no token)
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jwt = &state.settings.jwt;
    let user = session_token(request.headers(), &jwt.cookie_name)
        .and_then(|token| decode_user_id(&token, &jwt.secret))
        .map(|user_id| AuthUser { user_id });

    request.extensions_mut().insert(CurrentUser(user));

    next.run(request).await
}
