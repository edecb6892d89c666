// ABOUTME: Remote authentication backend calling the exercise-logging API
// ABOUTME: Persists only the token and user pair returned by the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AuthProvider, SessionStore};
use crate::constants::api_paths::{LOGIN, REGISTER};
use crate::constants::messages::{EMAIL_TAKEN, INVALID_CREDENTIALS};
use crate::constants::storage_keys::{REMOTE_AUTH_TOKEN, REMOTE_CURRENT_USER};
use crate::errors::{AppError, AppResult};
use crate::http_client::{ApiClient, ApiResponse};
use crate::logging::AppLogger;
use crate::models::{AuthSession, LoginCredentials, RegisterCredentials};
use crate::storage::StorageProvider;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;

/// Auth backend delegating credential checks to the remote API
pub struct RemoteAuthProvider {
    client: ApiClient,
    session: SessionStore,
}

impl RemoteAuthProvider {
    /// Create a provider calling `client` and persisting the session in `storage`
    #[must_use]
    pub fn new(client: ApiClient, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            client,
            session: SessionStore::new(storage, REMOTE_AUTH_TOKEN, REMOTE_CURRENT_USER),
        }
    }

    async fn accept(&self, response: &ApiResponse) -> AppResult<AuthSession> {
        let session: AuthSession = response.json()?;
        self.session.save(&session).await?;
        Ok(session)
    }
}

/// Map a rejected login; the body's `message` wins over the default
fn login_error(response: &ApiResponse) -> AppError {
    let message = response.error_field(&["message"]);
    if response.status.is_server_error() {
        AppError::external_service(message.unwrap_or_else(|| response.status_code().to_string()))
            .with_http_status(response.status_code())
    } else {
        AppError::auth_invalid(message.unwrap_or_else(|| INVALID_CREDENTIALS.to_owned()))
    }
}

/// Map a rejected registration; the body's `message` wins over the default
fn register_error(response: &ApiResponse) -> AppError {
    let message = response.error_field(&["message"]);
    match response.status {
        StatusCode::CONFLICT => {
            AppError::already_exists(message.unwrap_or_else(|| EMAIL_TAKEN.to_owned()))
        }
        StatusCode::BAD_REQUEST => AppError::invalid_input(
            message.unwrap_or_else(|| response.status_code().to_string()),
        ),
        status => AppError::external_service(message.unwrap_or_else(|| status.as_u16().to_string()))
            .with_http_status(status.as_u16()),
    }
}

#[async_trait]
impl AuthProvider for RemoteAuthProvider {
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthSession> {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password,
        });
        let response = self.client.post(LOGIN, None, &body).await?;
        if !response.is_success() {
            AppLogger::log_auth_event(&credentials.email, "login", false, Some("rejected by backend"));
            return Err(login_error(&response));
        }

        let session = self.accept(&response).await?;
        AppLogger::log_auth_event(&session.user.email, "login", true, None);
        Ok(session)
    }

    async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthSession> {
        let body = json!({
            "username": credentials.username,
            "email": credentials.email,
            "password": credentials.password,
        });
        let response = self.client.post(REGISTER, None, &body).await?;
        if !response.is_success() {
            AppLogger::log_auth_event(&credentials.email, "register", false, Some("rejected by backend"));
            return Err(register_error(&response));
        }

        let session = self.accept(&response).await?;
        AppLogger::log_auth_event(&session.user.email, "register", true, None);
        Ok(session)
    }

    async fn logout(&self) -> AppResult<()> {
        self.session.clear().await
    }

    async fn check_auth(&self) -> AppResult<AuthSession> {
        // Trusts the cached pair; the backend rejects stale tokens on use
        self.session.current().await
    }

    async fn get_token(&self) -> AppResult<Option<String>> {
        self.session.token().await
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}
