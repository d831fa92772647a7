//! `LightBnB` - data-access layer for a property-rental application
//!
//! Translates application-level requests into parameterized SQL queries
//! against `PostgreSQL` and shapes the returned rows into plain records.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Configuration management for the data layer
pub mod config;
/// Database connection and pooling
pub mod database;
pub mod error;
pub mod filter;
pub mod models;
/// Application-facing query surface
pub mod repository;

pub use config::Config;
pub use database::DatabasePool;
pub use error::{DbError, Result};
pub use filter::{build_property_query, PropertyFilter, SqlParam, DEFAULT_LIMIT};
pub use models::{NewProperty, NewUser, Property, Reservation, User};
pub use repository::Repository;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
