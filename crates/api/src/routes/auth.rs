//! Authentication routes: login, refresh, sign-out, and identity lookup.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain::models::UserRole;
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::auth::{parse_role, AuthError, AuthResult, AuthService};

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request body for sign-out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// User information in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub is_admin: bool,
}

/// Token pair in responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response body for login and refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub tokens: TokensResponse,
}

impl SessionResponse {
    fn from_result(result: AuthResult) -> Self {
        Self {
            user: UserResponse {
                id: result.user_id.to_string(),
                email: result.email,
                display_name: result.display_name,
                role: result.role,
                is_admin: result.role.is_admin(),
            },
            tokens: TokensResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                token_type: "Bearer".to_string(),
                expires_in: result.access_token_expires_in,
            },
        }
    }
}

fn map_auth_error(e: AuthError) -> ApiError {
    match e {
        AuthError::InvalidCredentials => ApiError::Unauthorized("Invalid credentials".to_string()),
        AuthError::UserDisabled => ApiError::Forbidden("Account is disabled".to_string()),
        AuthError::InvalidRefreshToken => {
            ApiError::Unauthorized("Invalid refresh token".to_string())
        }
        AuthError::DatabaseError(db_err) => ApiError::from(db_err),
        AuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
        AuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
        AuthError::Internal(msg) => ApiError::Internal(msg),
    }
}

fn auth_service(state: &AppState) -> Result<AuthService, ApiError> {
    AuthService::new(state.pool.clone(), &state.config.auth)
        .map_err(|e| ApiError::Internal(format!("Failed to initialize auth service: {}", e)))
}

/// Sign in with email and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    request.validate()?;

    let result = auth_service(&state)?
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse::from_result(result)))
}

/// Exchange a refresh token for a new token pair.
///
/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let result = auth_service(&state)?
        .refresh(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse::from_result(result)))
}

/// Sign out: revoke the presented refresh token's session.
///
/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Result<StatusCode, ApiError> {
    auth_service(&state)?
        .logout(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Current identity and capability flag.
///
/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Account no longer exists".to_string()))?;

    let role = parse_role(&user.role);

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        email: user.email,
        display_name: user.display_name,
        role,
        is_admin: role.is_admin(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let request = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_invalid_email() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_password() {
        let request = LoginRequest {
            email: "admin@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_session_response_flags_admin() {
        let result = AuthResult {
            user_id: uuid::Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            display_name: "Admin".to_string(),
            role: UserRole::Admin,
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_token_expires_in: 3600,
        };
        let response = SessionResponse::from_result(result);
        assert!(response.user.is_admin);
        assert_eq!(response.tokens.token_type, "Bearer");
    }
}
