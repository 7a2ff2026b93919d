//! Database connection management and the PostgreSQL post repository.

mod connections;
pub mod entity;
mod postgres;

pub use connections::{DatabaseConfig, connect};
pub use postgres::PostgresPostRepository;
