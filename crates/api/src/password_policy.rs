// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! Applied when an account is registered and when a password is changed.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password and confirmation do not match.
    #[error("New passwords do not match.")]
    ConfirmationMismatch,

    /// Password is too short.
    #[error("Password must be at least {min_length} characters long.")]
    TooShort { min_length: usize },
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// The confirmation is compared first, then the length.
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet policy requirements.
    pub fn validate(&self, password: &str, confirmation: &str) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        assert!(policy.validate("password", "password").is_ok());
        assert!(policy.validate("a much longer phrase", "a much longer phrase").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), PasswordPolicyError> = policy.validate("short12", "short12");

        assert_eq!(result, Err(PasswordPolicyError::TooShort { min_length: 8 }));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        // Seven characters, fourteen bytes
        let result: Result<(), PasswordPolicyError> = policy.validate("ééééééé", "ééééééé");

        assert_eq!(result, Err(PasswordPolicyError::TooShort { min_length: 8 }));
    }

    #[test]
    fn test_confirmation_mismatch_checked_first() {
        let policy: PasswordPolicy = PasswordPolicy::default();

        let result: Result<(), PasswordPolicyError> = policy.validate("abc", "abd");

        assert_eq!(result, Err(PasswordPolicyError::ConfirmationMismatch));
    }
}
