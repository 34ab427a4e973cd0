#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Player data gateway: a stateless data-access layer for player records,
//! saved game state, inventory counts, and score submission against a remote
//! hosted Postgres store.
//!
//! Callers build a [`StoreConfig`], open a connection with [`connect`], and
//! pass the resulting handle (or any [`sea_orm::ConnectionTrait`] impl) into
//! the operation functions under [`repos`]. The crate holds no global state.

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;

// Re-exports for public API
pub use config::{ConfigError, StoreConfig};
pub use db::connect;
pub use errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    gateway_test_support::logging::init();
}
