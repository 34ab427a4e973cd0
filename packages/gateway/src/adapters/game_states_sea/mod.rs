//! SeaORM adapter for the game-state repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::game_states;

pub mod dto;

pub use dto::GameStateCreate;

/// Insert a new saved state. States are append-only; nothing is updated.
pub async fn create_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameStateCreate,
) -> Result<game_states::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let state_active = game_states::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        dungeon_map: Set(dto.dungeon_map),
        entities: Set(dto.entities),
        created_at: Set(now),
    };

    state_active.insert(conn).await
}

/// Most recent state for the player.
///
/// Ordered by `created_at` descending with `id` descending as tiebreak, so
/// two states saved within the same clock tick still resolve to the later
/// insert.
pub async fn find_latest_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<game_states::Model>, sea_orm::DbErr> {
    game_states::Entity::find()
        .filter(game_states::Column::PlayerId.eq(player_id))
        .order_by(game_states::Column::CreatedAt, Order::Desc)
        .order_by(game_states::Column::Id, Order::Desc)
        .one(conn)
        .await
}
