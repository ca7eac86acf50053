//! Cross-cutting error types for Hyperlocal.
//!
//! Transport errors live in `hl-client` (`ApiError`), storage errors in
//! `hl-auth` (`AuthError`). The CLI converges everything through `anyhow`.

use thiserror::Error;

use crate::validation::FieldError;

/// Errors that can be raised by any Hyperlocal crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A wire enum value did not match any known variant.
    #[error("unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Client-side input validation failed.
    #[error("validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_field() {
        let err = CoreError::Validation(vec![
            FieldError::new("email", "Email is required"),
            FieldError::new("password", "Password is required"),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("email: Email is required"));
        assert!(rendered.contains("password: Password is required"));
    }
}
