//! SeaORM adapter for the scores repository - generic over ConnectionTrait.

use sea_orm::{
    ConnectionTrait, EntityTrait, NotSet, Order, QueryOrder, QuerySelect, Set,
};

use crate::entities::scores;

pub mod dto;

pub use dto::ScoreCreate;

/// Insert a score row. Scores are immutable once created.
pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreCreate,
) -> Result<(), sea_orm::DbErr> {
    let score_active = scores::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        level_reached: Set(dto.level_reached),
        enemies_defeated: Set(dto.enemies_defeated),
        treasures_collected: Set(dto.treasures_collected),
        score: Set(dto.score),
    };

    scores::Entity::insert(score_active)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

/// Top scores projected as `(score, player_id)`, highest score first.
///
/// Ties are returned in store order; the leaderboard contract leaves them
/// unordered.
pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<(i32, i64)>, sea_orm::DbErr> {
    scores::Entity::find()
        .select_only()
        .column(scores::Column::Score)
        .column(scores::Column::PlayerId)
        .order_by(scores::Column::Score, Order::Desc)
        .limit(limit)
        .into_tuple::<(i32, i64)>()
        .all(conn)
        .await
}
