//! Fixed operator credential store.

use dashboard_core::domain::Operator;
use dashboard_core::ports::{AuthError, PasswordService};

/// Holds the single operator identity for the lifetime of the process.
///
/// The password is hashed once at startup; the plaintext is never stored
/// and never logged.
pub struct CredentialStore {
    operator: Operator,
    passwords: Box<dyn PasswordService>,
}

impl CredentialStore {
    pub fn new(
        username: String,
        password: &str,
        passwords: Box<dyn PasswordService>,
    ) -> Result<Self, AuthError> {
        let password_hash = passwords.hash(password)?;
        Ok(Self {
            operator: Operator::new(username, password_hash),
            passwords,
        })
    }

    /// Check a login attempt against the fixed operator identity.
    ///
    /// Returns false on any mismatch; an unknown username and a wrong
    /// password are indistinguishable to the caller. The password is
    /// verified against the stored hash even when the username does not
    /// match, so both failure paths cost the same.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let password_matches = self
            .passwords
            .verify(password, &self.operator.password_hash)?;

        Ok(password_matches && username == self.operator.username)
    }

    pub fn username(&self) -> &str {
        &self.operator.username
    }
}
