//! Repository functions for the gateway's domain layer.
//!
//! These free functions are the crate's operation surface. Each takes a
//! `ConnectionTrait` impl so callers choose the connection handle per call.

pub mod game_states;
pub mod items;
pub mod players;
pub mod scores;
