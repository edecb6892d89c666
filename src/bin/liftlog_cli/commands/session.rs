// ABOUTME: Session commands for the liftlog CLI
// ABOUTME: register, login, logout and whoami through the auth service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::context::ServiceContext;
use liftlog::errors::{AppError, AppResult};
use liftlog::models::{LoginCredentials, RegisterCredentials};
use tracing::info;

use crate::helpers::display::{display_user, print_json};

/// Create an account and sign it in
pub async fn register(
    context: &ServiceContext,
    username: String,
    email: String,
    password: String,
    confirm_password: Option<String>,
    json: bool,
) -> AppResult<()> {
    let mut credentials = RegisterCredentials::new(username, email, password);
    if let Some(confirm_password) = confirm_password {
        credentials = credentials.with_confirmation(confirm_password);
    }

    let session = context.auth().register(&credentials).await?;
    context.sync_current_user().await;
    info!(user_id = %session.user.id, "Registered");

    if json {
        return print_json(&session.user);
    }
    display_user(&session.user);
    Ok(())
}

/// Sign in
pub async fn login(
    context: &ServiceContext,
    email: String,
    password: String,
    json: bool,
) -> AppResult<()> {
    let session = context
        .auth()
        .login(&LoginCredentials::new(email, password))
        .await?;
    context.sync_current_user().await;

    if json {
        return print_json(&session.user);
    }
    display_user(&session.user);
    Ok(())
}

/// Sign out
pub async fn logout(context: &ServiceContext) -> AppResult<()> {
    context.auth().logout().await?;
    context.sync_current_user().await;
    println!("Signed out");
    Ok(())
}

/// Show the signed-in user
pub async fn whoami(context: &ServiceContext, json: bool) -> AppResult<()> {
    let Some(user) = context.auth().get_current_user().await else {
        return Err(AppError::auth_required());
    };
    if json {
        return print_json(&user);
    }
    display_user(&user);
    Ok(())
}
