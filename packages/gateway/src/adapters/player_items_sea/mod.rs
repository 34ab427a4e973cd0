//! SeaORM adapter for the player inventory repository.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::player_items;

pub mod dto;

pub use dto::ItemGrant;

/// Insert the grant, or add its quantity to the existing row for
/// `(player_id, item_id)`.
///
/// A single conditional write against the pair's unique index; there is no
/// separate read, so concurrent grants for the same pair cannot lose an
/// increment or produce a second row.
pub async fn upsert_increment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ItemGrant,
) -> Result<(), sea_orm::DbErr> {
    let grant_active = player_items::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        item_id: Set(dto.item_id),
        quantity: Set(dto.quantity),
    };

    player_items::Entity::insert(grant_active)
        .on_conflict(
            OnConflict::columns([
                player_items::Column::PlayerId,
                player_items::Column::ItemId,
            ])
            .value(
                player_items::Column::Quantity,
                Expr::col(player_items::Column::Quantity).add(dto.quantity),
            )
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

/// Find the inventory row for a (player, item) pair.
///
/// Test-only utility. Production code has no inventory read path.
pub async fn find_by_player_and_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    item_id: &str,
) -> Result<Option<player_items::Model>, sea_orm::DbErr> {
    player_items::Entity::find()
        .filter(player_items::Column::PlayerId.eq(player_id))
        .filter(player_items::Column::ItemId.eq(item_id))
        .one(conn)
        .await
}
