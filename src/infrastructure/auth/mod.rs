//! Admin credential verification
//!
//! The registry consumes the admin token as an opaque value: it is configured
//! at startup and every presented credential is checked against it. Issuance,
//! expiry and scoping live outside this service.

use sha2::{Digest, Sha256};

use crate::domain::DomainError;

/// Verifies presented admin credentials against the configured token
///
/// Only the SHA-256 digest of the configured token is kept in memory, and
/// presented tokens are compared digest-to-digest so the comparison length
/// never depends on the secret.
#[derive(Debug, Clone)]
pub struct AdminTokenVerifier {
    expected_digest: [u8; 32],
}

impl AdminTokenVerifier {
    /// Create a verifier for the given admin token
    ///
    /// Fails if the configured token is empty, which would otherwise turn a
    /// missing `Authorization` header into a valid credential.
    pub fn new(token: &str) -> Result<Self, DomainError> {
        if token.trim().is_empty() {
            return Err(DomainError::configuration(
                "Admin token must not be empty; set auth.admin_token or APP__AUTH__ADMIN_TOKEN",
            ));
        }

        Ok(Self {
            expected_digest: digest(token),
        })
    }

    /// Check a presented credential, returning true only on exact match
    pub fn verify(&self, presented: &str) -> bool {
        digest(presented) == self.expected_digest
    }
}

fn digest(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}
