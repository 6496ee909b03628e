//! Password policy checks
//!
//! Two pure predicates with no shared state: a strength check for the user
//! password and a distinctness/length rule for a separate owner password.
//! The strength check is advisory — interactive callers may let the user
//! proceed anyway — while the owner-password rule is enforced everywhere.

use crate::error::{Error, Result};

/// Minimum length for a user password
pub const MIN_USER_PASSWORD_LEN: usize = 8;

/// Minimum length for a distinct owner password
pub const MIN_OWNER_PASSWORD_LEN: usize = 12;

/// Check a candidate password against the minimum strength rules.
///
/// Fails with [`Error::WeakPassword`] if the password is shorter than
/// 8 characters, or if it lacks any of: an uppercase letter, a lowercase
/// letter, a digit, a non-alphanumeric character. Character classification
/// is Unicode-aware.
pub fn check_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_USER_PASSWORD_LEN {
        return Err(Error::WeakPassword(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    if !(has_upper && has_lower && has_digit && has_special) {
        return Err(Error::WeakPassword(
            "Password should contain uppercase, lowercase, digits, and special characters"
                .to_string(),
        ));
    }

    Ok(())
}

/// Check a distinct owner password against the owner-password rule.
///
/// The owner password must be at least 12 characters (checked first) and
/// must differ from the user password; either violation is
/// [`Error::InvalidOwnerPassword`]. Unlike the strength check, this rule
/// has no override.
pub fn check_owner_password(user_password: &str, owner_password: &str) -> Result<()> {
    if owner_password.chars().count() < MIN_OWNER_PASSWORD_LEN {
        return Err(Error::InvalidOwnerPassword(
            "Owner password must be at least 12 characters".to_string(),
        ));
    }

    if owner_password == user_password {
        return Err(Error::InvalidOwnerPassword(
            "Owner password must be different from user password".to_string(),
        ));
    }

    Ok(())
}
