//! DTOs for game_states_sea adapter.

use sea_orm::entity::prelude::Json;

/// DTO for appending a saved game state.
#[derive(Debug, Clone)]
pub struct GameStateCreate {
    pub player_id: i64,
    pub dungeon_map: Json,
    pub entities: Json,
}
