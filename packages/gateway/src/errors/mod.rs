//! Error handling for the player data gateway.

pub mod domain;

pub use domain::DomainError;
