// ABOUTME: Authentication service validating credentials before they reach the auth port
// ABOUTME: Derives current-user and signed-in state from the port's session check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::wrap_port_failure;
use crate::auth::AuthProvider;
use crate::constants::messages::{AUTH_CHECK_FAILED, LOGIN_FAILED, LOGOUT_FAILED, REGISTRATION_FAILED};
use crate::errors::AppResult;
use crate::models::{AuthSession, LoginCredentials, RegisterCredentials, User};
use crate::validation::{validate_login_credentials, validate_register_credentials};
use std::sync::Arc;
use tracing::{debug, warn};

/// Session lifecycle: `Unauthenticated -> login/register -> Authenticated -> logout`
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
}

impl AuthService {
    /// Create a service over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// The underlying auth port
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn AuthProvider> {
        &self.provider
    }

    /// Sign in
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` "Validation failed: ..." without calling the
    /// port, the port's own rejection, or "Login failed: ..." for port failures
    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthSession> {
        if let Err(error) = validate_login_credentials(credentials).into_result() {
            debug!(message = %error.message, "Rejected login input");
            return Err(error);
        }
        self.provider
            .login(credentials)
            .await
            .map_err(|e| wrap_port_failure(e, LOGIN_FAILED))
    }

    /// Create an account and sign it in
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` "Validation failed: ..." without calling the
    /// port, the port's own rejection, or "Registration failed: ..." for port
    /// failures
    pub async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthSession> {
        if let Err(error) = validate_register_credentials(credentials).into_result() {
            debug!(message = %error.message, "Rejected registration input");
            return Err(error);
        }
        self.provider
            .register(credentials)
            .await
            .map_err(|e| wrap_port_failure(e, REGISTRATION_FAILED))
    }

    /// Sign out
    ///
    /// # Errors
    ///
    /// Returns "Logout failed: ..." if the session cannot be removed
    pub async fn logout(&self) -> AppResult<()> {
        self.provider
            .logout()
            .await
            .map_err(|e| wrap_port_failure(e, LOGOUT_FAILED))
    }

    /// Current session; never modifies it
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when signed out, or "Auth check failed: ..."
    /// if the stored session cannot be read
    pub async fn check_auth(&self) -> AppResult<AuthSession> {
        self.provider
            .check_auth()
            .await
            .map_err(|e| wrap_port_failure(e, AUTH_CHECK_FAILED))
    }

    /// Current bearer token; `None` when signed out or unreadable
    pub async fn get_token(&self) -> Option<String> {
        match self.provider.get_token().await {
            Ok(token) => token,
            Err(error) => {
                warn!(error = %error, "Could not read auth token");
                None
            }
        }
    }

    /// Signed-in user, if any
    pub async fn get_current_user(&self) -> Option<User> {
        self.check_auth().await.ok().map(|session| session.user)
    }

    /// Whether someone is signed in
    pub async fn is_authenticated(&self) -> bool {
        self.check_auth().await.is_ok()
    }

    /// Backend name of the auth port
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.provider.backend_name()
    }
}
