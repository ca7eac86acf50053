//! Client-side input validation.
//!
//! These rules reject obviously malformed input before a request is sent.
//! The backend re-validates everything; a pass here is not a guarantee the
//! server will accept the payload.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::errors::CoreError;

/// Largest accepted verification document.
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted verification document extensions (lowercase, without dot).
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

/// A single failed rule, keyed by the form field it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects field errors and converts into a `Result`.
#[derive(Debug, Default)]
struct Checks(Vec<FieldError>);

impl Checks {
    fn fail(&mut self, field: &'static str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize, label: &str) {
        let len = value.trim().chars().count();
        if len < min {
            self.fail(field, &format!("{label} must be at least {min} characters"));
        } else if len > max {
            self.fail(field, &format!("{label} must be less than {max} characters"));
        }
    }

    fn email(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.fail("email", "Email is required");
        } else if !looks_like_email(value) {
            self.fail("email", "Please enter a valid email address");
        }
    }

    fn finish(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.0))
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Registration form.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] listing every failed field.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    agreed: bool,
) -> Result<(), CoreError> {
    let mut checks = Checks::default();
    checks.length("name", name, 2, 50, "Full name");
    checks.email(email);
    checks.length("password", password, 6, 50, "Password");
    if confirm_password.is_empty() {
        checks.fail("confirmPassword", "Please confirm your password");
    } else if password != confirm_password {
        checks.fail("confirmPassword", "Passwords do not match");
    }
    if !agreed {
        checks.fail("agreed", "You must agree to the terms and privacy policy");
    }
    checks.finish()
}

/// Login form.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] listing every failed field.
pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    let mut checks = Checks::default();
    checks.email(email);
    if password.is_empty() {
        checks.fail("password", "Password is required");
    }
    checks.finish()
}

/// Strip everything but digits from a phone number.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Profile step of the verification wizard.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] listing every failed field.
pub fn validate_profile(phone: &str, address: &str, bio: &str) -> Result<(), CoreError> {
    let mut checks = Checks::default();
    if phone.trim().is_empty() {
        checks.fail("phoneNumber", "Phone number is required");
    } else if normalize_phone(phone).len() < 10 {
        checks.fail("phoneNumber", "Please enter a valid 10-digit phone number");
    }
    checks.length("address", address, 3, 200, "Address");
    checks.length("bio", bio, 10, 500, "Bio");
    checks.finish()
}

/// Trim and upper-case an invite code the way the join form does.
#[must_use]
pub fn normalize_join_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Invite codes look like `GRN-8821`: three letters, a dash, four digits.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the normalized code is malformed.
pub fn validate_join_code(code: &str) -> Result<String, CoreError> {
    let normalized = normalize_join_code(code);
    let mut checks = Checks::default();
    if normalized.is_empty() {
        checks.fail("code", "Community code is required");
    } else if !is_join_code(&normalized) {
        checks.fail("code", "Code must be in format: ABC-1234 (e.g., GRN-8821)");
    }
    checks.finish().map(|()| normalized)
}

fn is_join_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 8
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

/// Create-community form.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] listing every failed field.
pub fn validate_community(name: &str, description: &str) -> Result<(), CoreError> {
    let mut checks = Checks::default();
    checks.length("name", name, 3, 50, "Community name");
    checks.length("description", description, 10, 200, "Description");
    checks.finish()
}

/// Verification document selected for upload.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the file is too large or not an
/// accepted image/PDF type.
pub fn validate_document(field: &'static str, path: &Path, size: u64) -> Result<(), CoreError> {
    let mut checks = Checks::default();
    if size > MAX_DOCUMENT_BYTES {
        checks.fail(field, "File must be less than 5MB");
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    if !extension.is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str())) {
        checks.fail(field, "Only JPG, PNG, or PDF files are allowed");
    }
    checks.finish()
}

/// A rejection must explain itself; an approval must not carry a reason.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when rejecting without a reason.
pub fn validate_decision(approved: bool, rejection_reason: Option<&str>) -> Result<(), CoreError> {
    let mut checks = Checks::default();
    if !approved && rejection_reason.is_none_or(|r| r.trim().is_empty()) {
        checks.fail("rejectionReason", "A rejection reason is required");
    }
    checks.finish()
}
