// ABOUTME: Authentication models: users, roles, credentials and sessions
// ABOUTME: Owned by the auth port; the rest of the client holds read-only copies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular user: logs and reads their own exercises
    #[default]
    User,
    /// Administrator: additionally manages the reference catalog
    Admin,
}

impl UserRole {
    /// Wire name of the role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier
    pub id: String,
    /// Display name
    pub username: String,
    /// Login email
    pub email: String,
    /// Role
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    /// Whether this user may manage the catalog
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// An open session: who is signed in and the bearer token proving it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Signed-in user
    pub user: User,
    /// Session token
    pub token: String,
}

/// Login form input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

impl LoginCredentials {
    /// Create login credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCredentials {
    /// Desired display name
    pub username: String,
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
    /// Repeated password, must equal `password`
    pub confirm_password: String,
}

impl RegisterCredentials {
    /// Create registration input with a matching confirmation
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            email: email.into(),
            confirm_password: password.clone(),
            password,
        }
    }

    /// Replace the confirmation field
    #[must_use]
    pub fn with_confirmation(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = confirm_password.into();
        self
    }
}
