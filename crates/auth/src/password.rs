//! Password hashing and the strength policy.
//!
//! Argon2id with a random 16-byte salt, stored as a PHC string.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crewdesk_core::{DomainError, DomainResult};

/// Hash a plaintext password into a PHC string.
pub fn hash_password(password: &str) -> DomainResult<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| DomainError::internal(format!("salt generation failed: {e}")))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| DomainError::internal(format!("salt encoding failed: {e}")))?;

    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?
        .to_string();

    Ok(phc)
}

/// Verify a plaintext password against a stored PHC string.
///
/// An unparseable stored hash counts as a failed verification, not an error:
/// login must not leak storage details.
pub fn verify_password(password: &str, stored_phc: &str) -> bool {
    match PasswordHash::new(stored_phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Registration/change-password strength policy: at least 8 characters with
/// upper case, lower case and a digit.
pub fn validate_strength(password: &str) -> DomainResult<()> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(DomainError::validation(
            "password must be at least 8 characters and include uppercase, lowercase and digits",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let phc = hash_password("Sup3rSecret").unwrap();
        assert!(phc.starts_with("$argon2"));
        assert!(verify_password("Sup3rSecret", &phc));
        assert!(!verify_password("Sup3rSecret2", &phc));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("Sup3rSecret").unwrap();
        let b = hash_password("Sup3rSecret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn corrupt_stored_hash_fails_closed() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn strength_policy() {
        assert!(validate_strength("Abcdef12").is_ok());
        assert!(validate_strength("short1A").is_err());
        assert!(validate_strength("nouppercase1").is_err());
        assert!(validate_strength("NOLOWERCASE1").is_err());
        assert!(validate_strength("NoDigitsHere").is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six characters, eight bytes: must still be too short.
        assert!(validate_strength("ÀÀA1ab").is_err());
        // Eight characters clears the bar regardless of encoding width.
        assert!(validate_strength("ÀÀÀÀA1ab").is_ok());
    }
}
