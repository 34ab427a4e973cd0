//! Game-state repository functions for domain layer.
//!
//! Saved states are append-only: "current state" is defined purely as the
//! most recent row for the player, never a distinguished pointer.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

use crate::adapters::game_states_sea as game_states_adapter;
use crate::entities::game_states;
use crate::errors::domain::DomainError;

/// Saved game state domain model. The map and entity blobs are opaque to
/// the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub id: i64,
    pub player_id: i64,
    pub dungeon_map: JsonValue,
    pub entities: JsonValue,
    pub created_at: OffsetDateTime,
}

/// Data for appending a saved state (reduces parameter count)
#[derive(Debug, Clone)]
pub struct GameStateData {
    pub player_id: i64,
    pub dungeon_map: JsonValue,
    pub entities: JsonValue,
}

/// Append a new saved state for the player.
pub async fn save_game_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    data: GameStateData,
) -> Result<GameState, DomainError> {
    let dto = game_states_adapter::GameStateCreate {
        player_id: data.player_id,
        dungeon_map: data.dungeon_map,
        entities: data.entities,
    };
    let state = game_states_adapter::create_state(conn, dto).await?;
    Ok(GameState::from(state))
}

/// Most recent saved state for the player, or `None` when no state exists.
pub async fn load_game_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<GameState>, DomainError> {
    let state = game_states_adapter::find_latest_by_player(conn, player_id).await?;
    Ok(state.map(GameState::from))
}

// Conversion from SeaORM model to domain model

impl From<game_states::Model> for GameState {
    fn from(model: game_states::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            dungeon_map: model.dungeon_map,
            entities: model.entities,
            created_at: model.created_at,
        }
    }
}
