//! Authentication routes and middleware
//!
//! Identity is deliberately thin: accounts exist so practice history can be
//! keyed to a stable user id. The rest of the system only ever sees that id.

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::AppState;

/// Authenticated user info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let username = payload.username.trim();
    let email = payload.email.trim();

    if username.is_empty() || email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username, email and password are required".to_string(),
        ));
    }

    if state.db.get_user_by_login(username).await?.is_some()
        || state.db.get_user_by_login(email).await?.is_some()
    {
        return Err(ApiError::BadRequest(
            "username or email already taken".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = state.db.create_user(username, email, &password_hash).await?;
    let session = state.db.create_session(user.id).await?;

    tracing::info!(user_id = user.id, "Registered new user");

    Ok(Json(AuthResponse {
        token: session.token,
        user_id: user.id,
        username: user.username,
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state
        .db
        .get_user_by_login(payload.username.trim())
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid credentials".to_string()))?;

    let valid = bcrypt::verify(&payload.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !valid {
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    }

    let session = state.db.create_session(user.id).await?;

    Ok(Json(AuthResponse {
        token: session.token,
        user_id: user.id,
        username: user.username,
    }))
}

/// Auth middleware - extracts session token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    let token = bearer_token(&request)?
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let session = state
        .db
        .get_session(&token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid session token".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: session.user_id,
    });

    Ok(next.run(request).await)
}

/// Optional auth middleware - anonymous requests pass through untouched,
/// but a present-and-invalid token is still rejected
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    if let Some(token) = bearer_token(&request)? {
        let session = state
            .db
            .get_session(&token)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid session token".to_string()))?;

        request.extensions_mut().insert(AuthenticatedUser {
            user_id: session.user_id,
        });
    }

    Ok(next.run(request).await)
}

/// Extract the Bearer token, if the Authorization header is present
fn bearer_token(request: &Request<Body>) -> Result<Option<String>> {
    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

    Ok(Some(token.to_string()))
}
