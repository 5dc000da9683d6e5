//! Credential validation performed before a login intent is submitted.
//!
//! Rules run in order and the first failure wins. Validation never touches
//! the session store; callers surface the error to the user directly.

use thiserror::Error;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Password is required")]
    MissingPassword,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Checks user-supplied credentials for presence and length.
///
/// # Errors
/// Returns the first rule that fails.
pub fn validate(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if password.trim().is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_is_missing() {
        for username in ["", " ", "\t\n", "   "] {
            assert_eq!(
                validate(username, "password"),
                Err(ValidationError::MissingUsername)
            );
        }
    }

    #[test]
    fn test_username_checked_before_password() {
        assert_eq!(validate("", ""), Err(ValidationError::MissingUsername));
        assert_eq!(validate(" ", "abc"), Err(ValidationError::MissingUsername));
    }

    #[test]
    fn test_blank_password_is_missing() {
        assert_eq!(validate("test", ""), Err(ValidationError::MissingPassword));
        // Whitespace-only passwords count as missing, even when long enough.
        assert_eq!(
            validate("test", "         "),
            Err(ValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_short_password_is_rejected() {
        for password in ["a", "abc", "12345", " abcd"] {
            assert_eq!(
                validate("test", password),
                Err(ValidationError::PasswordTooShort)
            );
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Five two-byte characters: ten bytes, still too short.
        assert_eq!(
            validate("test", "ééééé"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate("test", "éééééé"), Ok(()));
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert_eq!(validate("test", "password"), Ok(()));
        assert_eq!(validate("  someone  ", "123456"), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingUsername.to_string(),
            "Username is required"
        );
        assert_eq!(
            ValidationError::MissingPassword.to_string(),
            "Password is required"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
    }
}
