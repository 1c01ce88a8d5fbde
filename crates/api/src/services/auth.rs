//! Authentication service for login, token refresh, and sign-out.
//!
//! The session lifecycle is explicit: login creates a session row keyed by
//! the hashed refresh token, refresh rotates it, and sign-out deletes it.
//! Access tokens are short-lived and carry the role; only the refresh token
//! touches the sessions table.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use domain::models::UserRole;
use persistence::entities::UserEntity;
use persistence::repositories::UserRepository;
use shared::crypto::sha256_hex;
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{verify_password, PasswordError};

use crate::config::JwtAuthConfig;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User is disabled")]
    UserDisabled,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result of a successful login or refresh.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_in: i64,
}

/// Database row for session lookup.
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    user_id: Uuid,
}

/// Builds a [`JwtConfig`] from the application auth settings.
pub fn build_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, JwtError> {
    JwtConfig::with_leeway(
        &normalize_pem_key(&config.private_key),
        &normalize_pem_key(&config.public_key),
        config.access_token_expiry_secs,
        config.refresh_token_expiry_secs,
        config.leeway_secs,
    )
}

/// Env files usually carry PEM keys on one line with literal `\n` sequences
/// and sometimes surrounding quotes.
fn normalize_pem_key(key: &str) -> String {
    key.trim_matches('"').trim_matches('\'').replace("\\n", "\n")
}

/// Authentication service.
pub struct AuthService {
    pool: PgPool,
    users: UserRepository,
    jwt: JwtConfig,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl AuthService {
    /// Creates a new AuthService with the given pool and JWT configuration.
    pub fn new(pool: PgPool, config: &JwtAuthConfig) -> Result<Self, AuthError> {
        let jwt = build_jwt_config(config)
            .map_err(|e| AuthError::Internal(format!("Failed to initialize JWT: {}", e)))?;

        Ok(Self {
            users: UserRepository::new(pool.clone()),
            pool,
            jwt,
            access_token_expiry: config.access_token_expiry_secs,
            refresh_token_expiry: config.refresh_token_expiry_secs,
        })
    }

    /// Login with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::UserDisabled);
        }

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.users.touch_last_login(user.id).await?;

        self.issue_tokens(user).await
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// The presented token must both validate and match a live session row;
    /// the matched session is rotated out so each refresh token is single-use.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResult, AuthError> {
        self.jwt
            .validate_refresh_token(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let token_hash = sha256_hex(refresh_token);
        let session: Option<SessionRow> = sqlx::query_as(
            "SELECT id, user_id FROM sessions WHERE refresh_token_hash = $1 AND expires_at > NOW()",
        )
        .bind(&token_hash)
        .fetch_optional(&self.pool)
        .await?;

        let session = session.ok_or(AuthError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        if !user.is_active {
            return Err(AuthError::UserDisabled);
        }

        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(session.id)
            .execute(&self.pool)
            .await?;

        self.issue_tokens(user).await
    }

    /// Sign out: delete the session belonging to the presented refresh
    /// token. Idempotent - an unknown or already-revoked token is not an
    /// error.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let token_hash = sha256_hex(refresh_token);
        sqlx::query("DELETE FROM sessions WHERE refresh_token_hash = $1")
            .bind(&token_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn issue_tokens(&self, user: UserEntity) -> Result<AuthResult, AuthError> {
        let role = parse_role(&user.role);

        let (access_token, _) = self.jwt.generate_access_token(user.id, role.as_str())?;
        let (refresh_token, _) = self.jwt.generate_refresh_token(user.id, role.as_str())?;

        let expires_at = Utc::now() + Duration::seconds(self.refresh_token_expiry);
        sqlx::query(
            "INSERT INTO sessions (user_id, refresh_token_hash, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(user.id)
        .bind(sha256_hex(&refresh_token))
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(AuthResult {
            user_id: user.id,
            email: user.email,
            display_name: user.display_name,
            role,
            access_token,
            refresh_token,
            access_token_expires_in: self.access_token_expiry,
        })
    }
}

/// Stored roles are constrained by the schema; anything unexpected demotes
/// to the non-admin role.
pub fn parse_role(role: &str) -> UserRole {
    role.parse().unwrap_or(UserRole::User)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pem_key_literal_newlines() {
        let raw = "-----BEGIN KEY-----\\nabc\\n-----END KEY-----";
        let normalized = normalize_pem_key(raw);
        assert_eq!(normalized.matches('\n').count(), 2);
        assert!(!normalized.contains("\\n"));
    }

    #[test]
    fn test_normalize_pem_key_strips_quotes() {
        assert_eq!(normalize_pem_key("\"abc\""), "abc");
        assert_eq!(normalize_pem_key("'abc'"), "abc");
    }

    #[test]
    fn test_normalize_pem_key_passthrough() {
        let key = "-----BEGIN KEY-----\nabc\n-----END KEY-----";
        assert_eq!(normalize_pem_key(key), key);
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("admin"), UserRole::Admin);
        assert_eq!(parse_role("user"), UserRole::User);
        assert_eq!(parse_role("something-else"), UserRole::User);
    }
}
