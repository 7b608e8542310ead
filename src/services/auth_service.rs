//! Authentication service - Signup, login and session tokens.
//!
//! Sessions are HS256 JWTs stored in the session cookie.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account. Fails with `UsernameTaken` if the name is in use.
    async fn signup(&self, username: String, password: String) -> AppResult<User>;

    /// Check credentials, distinguishing unknown usernames from wrong passwords.
    async fn login(&self, username: &str, password: &str) -> AppResult<User>;

    /// Sign a session token for a logged-in user
    fn issue_session(&self, user: &User) -> AppResult<String>;

    /// Verify a session token and extract claims
    fn verify_session(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn signup(&self, username: String, password: String) -> AppResult<User> {
        let username = username.trim().to_string();

        if self.uow.users().find_by_username(&username).await?.is_some() {
            return Err(AppError::UsernameTaken);
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.uow.users().create(username, password_hash).await?;

        tracing::info!(user_id = user.id, username = %user.username, "User signed up");
        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .uow
            .users()
            .find_by_username(username.trim())
            .await?
            .ok_or(AppError::UnknownUsername)?;

        if !user.password().verify(password) {
            tracing::debug!(user_id = user.id, "Password mismatch");
            return Err(AppError::PasswordMismatch);
        }

        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    fn issue_session(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session_expiration_hours);

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.session_secret_bytes()),
        )?;

        Ok(token)
    }

    fn verify_session(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.session_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
