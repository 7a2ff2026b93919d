//! # Dashboard Infrastructure
//!
//! Concrete implementations of the ports defined in `dashboard-core`:
//! PostgreSQL persistence via SeaORM and JWT + Argon2 authentication.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, CredentialStore, JwtTokenService};
pub use database::{DatabaseConfig, PostgresPostRepository};
