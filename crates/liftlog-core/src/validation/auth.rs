// ABOUTME: Validation rules for login and registration credentials
// ABOUTME: Email shape, password length, username length and charset, confirmation match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FieldError, ValidationResult};
use crate::constants::limits::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::models::{LoginCredentials, RegisterCredentials};
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot in the domain part
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static USERNAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").ok());

/// Validate an email address
#[must_use]
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::from_errors(vec![FieldError::new("email", "Email is required")]);
    }

    let well_formed = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email));
    if well_formed {
        ValidationResult::ok()
    } else {
        ValidationResult::from_errors(vec![FieldError::new(
            "email",
            "Please enter a valid email address",
        )])
    }
}

/// Validate a password: present and at least 8 characters
#[must_use]
pub fn validate_password(password: &str) -> ValidationResult {
    if password.trim().is_empty() {
        return ValidationResult::from_errors(vec![FieldError::new(
            "password",
            "Password is required",
        )]);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::from_errors(vec![FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
        )]);
    }
    ValidationResult::ok()
}

/// Validate a username: 3 to 20 characters from `[A-Za-z0-9_-]`
///
/// Length and charset are independent rules; both may be reported.
#[must_use]
pub fn validate_username(username: &str) -> ValidationResult {
    if username.trim().is_empty() {
        return ValidationResult::from_errors(vec![FieldError::new(
            "username",
            "Username is required",
        )]);
    }

    let mut errors = Vec::new();
    let length = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
        errors.push(FieldError::new(
            "username",
            format!(
                "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
            ),
        ));
    }
    let allowed = USERNAME_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(username));
    if !allowed {
        errors.push(FieldError::new(
            "username",
            "Username can only contain letters, numbers, underscores, and hyphens",
        ));
    }
    ValidationResult::from_errors(errors)
}

/// Validate login credentials: email, then password
#[must_use]
pub fn validate_login_credentials(credentials: &LoginCredentials) -> ValidationResult {
    let mut errors = validate_email(&credentials.email).errors;
    errors.extend(validate_password(&credentials.password).errors);
    ValidationResult::from_errors(errors)
}

/// Validate registration credentials: username, email, password, then confirmation
#[must_use]
pub fn validate_register_credentials(credentials: &RegisterCredentials) -> ValidationResult {
    let mut errors = validate_username(&credentials.username).errors;
    errors.extend(validate_email(&credentials.email).errors);
    errors.extend(validate_password(&credentials.password).errors);
    if credentials.password != credentials.confirm_password {
        errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
    }
    ValidationResult::from_errors(errors)
}
