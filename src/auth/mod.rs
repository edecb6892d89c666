// ABOUTME: Authentication port with interchangeable local and remote backends
// ABOUTME: Owns the signed-in session; the rest of the client only reads it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication Port
//!
//! [`AuthProvider`] is the single owner of the session state. Two backends
//! implement it:
//!
//! - [`local::LocalAuthProvider`] keeps a bcrypt-hashed user table in the
//!   local store and issues opaque tokens itself
//! - [`remote::RemoteAuthProvider`] calls the backend API and only persists
//!   the `{user, token}` pair it returns
//!
//! Both persist the session through [`SessionStore`], so `check_auth` and
//! `get_token` behave the same whichever backend is configured.

/// Local user table backend
pub mod local;
/// Remote API backend
pub mod remote;

pub use local::LocalAuthProvider;
pub use remote::RemoteAuthProvider;

use crate::constants::messages::NO_AUTH_TOKEN;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{AuthSession, LoginCredentials, RegisterCredentials, User};
use crate::storage::{load_json, save_json, StorageProvider};
use async_trait::async_trait;
use std::sync::Arc;

/// Authentication provider trait for pluggable backend implementations
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in and persist the resulting session
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for rejected credentials, or a port failure
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthSession>;

    /// Create an account, sign it in and persist the session
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` for a taken email, or a port failure
    async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthSession>;

    /// Forget the current session; succeeds when nobody is signed in
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be removed from storage
    async fn logout(&self) -> AppResult<()>;

    /// Current session without modifying it
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is signed in, or a port failure
    async fn check_auth(&self) -> AppResult<AuthSession>;

    /// Current bearer token, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read
    async fn get_token(&self) -> AppResult<Option<String>>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Session persistence shared by the auth backends
///
/// A session exists only when both the token and the user record are present.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn StorageProvider>,
    token_key: &'static str,
    user_key: &'static str,
}

impl SessionStore {
    /// Session stored under `token_key` / `user_key`
    #[must_use]
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        token_key: &'static str,
        user_key: &'static str,
    ) -> Self {
        Self {
            storage,
            token_key,
            user_key,
        }
    }

    /// Persist `session`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails
    pub async fn save(&self, session: &AuthSession) -> AppResult<()> {
        save_json(self.storage.as_ref(), self.token_key, &session.token).await?;
        save_json(self.storage.as_ref(), self.user_key, &session.user).await
    }

    /// Remove the persisted session
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails
    pub async fn clear(&self) -> AppResult<()> {
        self.storage.remove(self.token_key).await?;
        self.storage.remove(self.user_key).await
    }

    /// Stored token, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value cannot be read
    pub async fn token(&self) -> AppResult<Option<String>> {
        load_json(self.storage.as_ref(), self.token_key).await
    }

    /// Stored session
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` if either half is missing, or a storage error
    pub async fn current(&self) -> AppResult<AuthSession> {
        let token: Option<String> = self.token().await?;
        let user: Option<User> = load_json(self.storage.as_ref(), self.user_key).await?;
        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(AuthSession { user, token }),
            _ => Err(AppError::auth_required()),
        }
    }
}

/// Bearer token for an authenticated remote call
///
/// # Errors
///
/// Returns `AuthRequired` "No authentication token" when nobody is signed in
pub async fn require_token(auth: &dyn AuthProvider) -> AppResult<String> {
    auth.get_token()
        .await?
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::new(ErrorCode::AuthRequired, NO_AUTH_TOKEN))
}
