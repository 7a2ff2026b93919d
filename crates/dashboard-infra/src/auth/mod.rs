//! Authentication infrastructure: JWT tokens, Argon2 hashing, and the
//! fixed operator credential store.

mod credentials;
mod jwt;
mod password;

pub use credentials::CredentialStore;
pub use jwt::JwtTokenService;
pub use password::Argon2PasswordService;
