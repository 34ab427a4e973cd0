//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub username: String,
}

/// Cardinality-explicit result of a username lookup.
///
/// `players.username` carries a unique index, so `ManyMatches` means the
/// store no longer upholds it; [`get_player`] reports that as corruption
/// rather than silently picking a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerLookup {
    Found(Player),
    NotFound,
    ManyMatches { count: usize },
}

/// Partial update for a player row; only the set fields are applied.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub username: Option<String>,
}

/// Create a player with the given username.
///
/// A taken username surfaces as `Conflict(UniqueUsername)` from the store's
/// unique index.
pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate {
        username: username.to_string(),
    };
    let player = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(player))
}

/// Look up a player by username, reporting cardinality explicitly.
pub async fn lookup_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<PlayerLookup, DomainError> {
    let mut matches = players_adapter::find_all_by_username(conn, username).await?;

    match matches.len() {
        0 => Ok(PlayerLookup::NotFound),
        1 => Ok(PlayerLookup::Found(Player::from(matches.remove(0)))),
        count => Ok(PlayerLookup::ManyMatches { count }),
    }
}

/// Fetch the single player with this username (strict cardinality).
///
/// # Returns
/// * `Ok(Player)` - Exactly one row matched
/// * `Err(NotFound)` - No row matched
/// * `Err(Infra(DataCorruption))` - More than one row matched
pub async fn get_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Player, DomainError> {
    match lookup_by_username(conn, username).await? {
        PlayerLookup::Found(player) => Ok(player),
        PlayerLookup::NotFound => Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player named '{username}'"),
        )),
        PlayerLookup::ManyMatches { count } => Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("{count} players share username '{username}'"),
        )),
    }
}

/// Apply `update` to the player's row.
///
/// An unknown `player_id` is a no-op returning `Ok(None)`, not an error.
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    update: PlayerUpdate,
) -> Result<Option<Player>, DomainError> {
    let patch = players_adapter::PlayerPatch {
        username: update.username,
    };
    let player = players_adapter::update_player(conn, player_id, patch).await?;
    Ok(player.map(Player::from))
}

// Conversion from SeaORM model to domain model

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}
