use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password digest is malformed: {0}")]
    MalformedDigest(String),
}

/// One-way salted password hashing.
///
/// Every digest carries its own random salt (PHC string format), so two
/// hashes of the same password never compare equal. Comparison against a
/// submitted password must go through [`PasswordHasher::verify`]; digests
/// are not comparable with `==`.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// The Argon2id cost parameters are the crate defaults, fixed at build
    /// time, so every account shares one security baseline.
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// A wrong password is `Ok(false)`. Only an unparseable digest is an
    /// error, signaling a corrupted record rather than a failed login.
    ///
    /// # Errors
    /// * `MalformedDigest` - the stored digest is not a valid PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::MalformedDigest(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "Abacates3825.";

        let digest = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &digest)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("Abacates3825!", &digest)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_digests_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").expect("Failed to hash");
        let second = hasher.hash("same_password").expect("Failed to hash");

        // Fresh salt each call: equal plaintexts, different digests.
        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first).unwrap());
        assert!(hasher.verify("same_password", &second).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error_not_a_mismatch() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify("password", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::MalformedDigest(_))));
    }
}
