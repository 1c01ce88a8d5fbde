//! JWT authentication middleware.
//!
//! `require_auth` admits any active signed-in identity; `require_admin`
//! additionally requires the admin role. Admin-gated routes therefore answer
//! 401 to anonymous callers and 403 to signed-in non-admins, before any
//! repository is touched.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use domain::models::UserRole;
use shared::jwt::JwtConfig;

use crate::app::AppState;
use crate::services::auth::build_jwt_config;

/// Authenticated identity extracted from the access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
    /// JWT ID of the access token.
    pub jti: String,
}

impl AuthUser {
    /// Validates an access token and builds the identity it carries.
    pub fn from_token(jwt: &JwtConfig, token: &str) -> Result<Self, String> {
        let claims = jwt
            .validate_access_token(token)
            .map_err(|e| format!("Invalid token: {}", e))?;

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|_| "Invalid user ID in token".to_string())?;

        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|_| "Invalid role in token".to_string())?;

        Ok(AuthUser {
            user_id,
            role,
            jti: claims.jti,
        })
    }
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

fn authenticate(state: &AppState, req: &Request<Body>) -> Result<AuthUser, Response> {
    let token = bearer_token(req)
        .ok_or_else(|| unauthorized_response("Missing or invalid Authorization header"))?;

    let jwt = build_jwt_config(&state.config.auth).map_err(|e| {
        tracing::error!("Failed to create JWT config: {}", e);
        internal_error_response("Authentication service unavailable")
    })?;

    AuthUser::from_token(&jwt, token).map_err(|e| {
        tracing::debug!("JWT validation failed: {}", e);
        unauthorized_response("Invalid or expired token")
    })
}

/// Middleware that requires a valid access token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&state, &req) {
        Ok(auth) => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(response) => response,
    }
}

/// Middleware that requires a valid access token with the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&state, &req) {
        Ok(auth) if auth.role.is_admin() => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Ok(_) => forbidden_response("Admin access required"),
        Err(response) => response,
    }
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

fn forbidden_response(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": message
        })),
    )
        .into_response()
}

fn internal_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}
