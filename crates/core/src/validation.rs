//! Mock credential validation.
//!
//! No request ever reaches the VFS backend. The check applies two local
//! format rules after a simulated round-trip delay (the delay lives in the
//! command layer so this module stays synchronous and trivially testable).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use slotwatch_domain::Credentials;

/// How long the command layer pretends the remote check takes.
pub const SIMULATED_CHECK_DELAY: Duration = Duration::from_millis(1500);

/// Lifecycle of a credential check as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// No check has run yet.
    #[default]
    Unknown,
    /// A check is in flight.
    Validating,
    /// The last check passed.
    Valid,
    /// The last check failed.
    Invalid,
}

/// Applies the mock format rules to a credential pair.
///
/// Rules: both fields non-empty, the email contains `@`, and the password is
/// at least six characters. Never returns `Unknown` or `Validating`.
#[must_use]
pub fn check(credentials: &Credentials) -> ValidationStatus {
    if !credentials.is_complete() {
        return ValidationStatus::Invalid;
    }
    if !credentials.email.contains('@') {
        return ValidationStatus::Invalid;
    }
    if credentials.password.chars().count() < 6 {
        return ValidationStatus::Invalid;
    }
    ValidationStatus::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials { email: email.to_string(), password: password.to_string() }
    }

    #[test]
    fn well_formed_credentials_pass() {
        let creds = credentials("user@example.com", "hunter2");
        assert_eq!(check(&creds), ValidationStatus::Valid);
    }

    #[test]
    fn empty_fields_fail() {
        assert_eq!(check(&credentials("", "")), ValidationStatus::Invalid);
        assert_eq!(check(&credentials("user@example.com", "")), ValidationStatus::Invalid);
        assert_eq!(check(&credentials("", "hunter2")), ValidationStatus::Invalid);
    }

    #[test]
    fn email_must_contain_at_sign() {
        assert_eq!(check(&credentials("user.example.com", "hunter2")), ValidationStatus::Invalid);
    }

    #[test]
    fn password_must_be_six_chars() {
        assert_eq!(check(&credentials("user@example.com", "12345")), ValidationStatus::Invalid);
        assert_eq!(check(&credentials("user@example.com", "123456")), ValidationStatus::Valid);
        // Length is counted in characters, not bytes.
        assert_eq!(check(&credentials("user@example.com", "şifre1")), ValidationStatus::Valid);
    }

    #[test]
    fn default_status_is_unknown() {
        assert_eq!(ValidationStatus::default(), ValidationStatus::Unknown);
    }
}
