// ABOUTME: Local authentication backend over the key-value store
// ABOUTME: bcrypt-hashed user table, locally issued tokens, seeded administrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AuthProvider, SessionStore};
use crate::constants::messages::{EMAIL_TAKEN, INVALID_CREDENTIALS};
use crate::constants::storage_keys::{LOCAL_AUTH_TOKEN, LOCAL_CURRENT_USER, LOCAL_USERS};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{AuthSession, LoginCredentials, RegisterCredentials, User, UserRole};
use crate::storage::{load_json, save_json, StorageProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

/// A user row of the local table; the hash never leaves this module
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    id: String,
    username: String,
    email: String,
    #[serde(default)]
    role: UserRole,
    password_hash: String,
}

impl StoredUser {
    fn public(&self) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// bcrypt cost used when none is given
///
/// Debug builds use the minimum cost (4); release builds use the library default.
#[must_use]
pub const fn default_bcrypt_cost() -> u32 {
    if cfg!(debug_assertions) {
        4
    } else {
        bcrypt::DEFAULT_COST
    }
}

/// Hash on the blocking pool to keep bcrypt off the async executor
async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Check `password` against a stored hash; unreadable hashes never match
async fn verify_password(password: &str, hash: &str) -> bool {
    let password = password.to_owned();
    let hash = hash.to_owned();
    match tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash)).await {
        Ok(Ok(matches)) => matches,
        Ok(Err(e)) => {
            warn!(error = %e, "Stored password hash is unreadable; treating as mismatch");
            false
        }
        Err(e) => {
            warn!(error = %e, "Password verification task failed; treating as mismatch");
            false
        }
    }
}

/// Auth backend keeping users and the session in local storage
pub struct LocalAuthProvider {
    storage: Arc<dyn StorageProvider>,
    session: SessionStore,
    bcrypt_cost: u32,
    // Serializes read-modify-write of the user table
    users_lock: Mutex<()>,
}

impl LocalAuthProvider {
    /// Create a provider over `storage` with [`default_bcrypt_cost`]
    #[must_use]
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self::with_cost(storage, default_bcrypt_cost())
    }

    /// Create a provider hashing with `bcrypt_cost`
    #[must_use]
    pub fn with_cost(storage: Arc<dyn StorageProvider>, bcrypt_cost: u32) -> Self {
        let session = SessionStore::new(Arc::clone(&storage), LOCAL_AUTH_TOKEN, LOCAL_CURRENT_USER);
        Self {
            storage,
            session,
            bcrypt_cost,
            users_lock: Mutex::new(()),
        }
    }

    /// Ensure an administrator with `email` exists
    ///
    /// Returns the existing user untouched when the email is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the user table cannot be read or written
    pub async fn seed_admin(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let _guard = self.users_lock.lock().await;
        let mut users = self.load_users().await?;
        if let Some(existing) = find_by_email(&users, email) {
            return Ok(existing.public());
        }

        let admin = StoredUser {
            id: new_user_id(),
            username: username.to_owned(),
            email: email.trim().to_owned(),
            role: UserRole::Admin,
            password_hash: hash_password(password, self.bcrypt_cost).await?,
        };
        let public = admin.public();
        users.push(admin);
        self.save_users(&users).await?;
        debug!(email = %public.email, "Seeded local administrator");
        Ok(public)
    }

    /// Number of registered users
    ///
    /// # Errors
    ///
    /// Returns an error if the user table cannot be read
    pub async fn user_count(&self) -> AppResult<usize> {
        Ok(self.load_users().await?.len())
    }

    async fn load_users(&self) -> AppResult<Vec<StoredUser>> {
        Ok(load_json(self.storage.as_ref(), LOCAL_USERS)
            .await?
            .unwrap_or_default())
    }

    async fn save_users(&self, users: &[StoredUser]) -> AppResult<()> {
        save_json(self.storage.as_ref(), LOCAL_USERS, users).await
    }

    async fn open_session(&self, user: &StoredUser) -> AppResult<AuthSession> {
        let session = AuthSession {
            user: user.public(),
            token: new_token(&user.id),
        };
        self.session.save(&session).await?;
        Ok(session)
    }
}

fn find_by_email<'a>(users: &'a [StoredUser], email: &str) -> Option<&'a StoredUser> {
    let email = email.trim();
    users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
}

fn new_user_id() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}

fn new_token(user_id: &str) -> String {
    format!("local_{user_id}_{}", Uuid::new_v4().simple())
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthSession> {
        let users = self.load_users().await?;
        let Some(user) = find_by_email(&users, &credentials.email) else {
            AppLogger::log_auth_event(&credentials.email, "login", false, Some("unknown email"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        if !verify_password(&credentials.password, &user.password_hash).await {
            AppLogger::log_auth_event(&credentials.email, "login", false, Some("password mismatch"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        let session = self.open_session(user).await?;
        AppLogger::log_auth_event(&session.user.email, "login", true, None);
        Ok(session)
    }

    async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthSession> {
        let _guard = self.users_lock.lock().await;
        let mut users = self.load_users().await?;
        if find_by_email(&users, &credentials.email).is_some() {
            AppLogger::log_auth_event(&credentials.email, "register", false, Some("email taken"));
            return Err(AppError::already_exists(EMAIL_TAKEN));
        }

        let user = StoredUser {
            id: new_user_id(),
            username: credentials.username.trim().to_owned(),
            email: credentials.email.trim().to_owned(),
            role: UserRole::User,
            password_hash: hash_password(&credentials.password, self.bcrypt_cost).await?,
        };
        users.push(user.clone());
        self.save_users(&users).await?;

        let session = self.open_session(&user).await?;
        AppLogger::log_auth_event(&session.user.email, "register", true, None);
        Ok(session)
    }

    async fn logout(&self) -> AppResult<()> {
        self.session.clear().await
    }

    async fn check_auth(&self) -> AppResult<AuthSession> {
        self.session.current().await
    }

    async fn get_token(&self) -> AppResult<Option<String>> {
        self.session.token().await
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
