//! SeaORM adapters for the gateway repositories.
//!
//! Each module holds free query functions for one table, generic over
//! `ConnectionTrait` and returning `sea_orm::DbErr`; the repos layer maps
//! to `DomainError` via `From<DbErr>`.

pub mod game_states_sea;
pub mod player_items_sea;
pub mod players_sea;
pub mod scores_sea;
