//! SeaORM adapter for the players repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerPatch};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player_active = players::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
    };

    player_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

/// Every row matching the username.
///
/// Returns all matches rather than `.one()` so the repos layer can apply
/// its strict-cardinality policy instead of letting the store pick a row.
pub async fn find_all_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Username.eq(username))
        .all(conn)
        .await
}

/// Apply the set fields of `patch` to the matching row, then refetch.
///
/// Returns `None` when no row matched `player_id`; an empty patch refetches
/// without issuing an update.
pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    patch: PlayerPatch,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    let mut update = players::Entity::update_many().filter(players::Column::Id.eq(player_id));

    let mut any_set = false;
    if let Some(username) = patch.username {
        update = update.col_expr(players::Column::Username, Expr::val(username).into());
        any_set = true;
    }

    if !any_set {
        return find_by_id(conn, player_id).await;
    }

    let result = update.exec(conn).await?;
    if result.rows_affected == 0 {
        return Ok(None);
    }

    find_by_id(conn, player_id).await
}
