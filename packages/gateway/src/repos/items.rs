//! Inventory repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::player_items_sea as items_adapter;
use crate::errors::domain::DomainError;

/// Quantity granted when a caller does not choose one.
pub const DEFAULT_ITEM_QUANTITY: i32 = 1;

/// Grant `quantity` of an item to the player.
///
/// At most one inventory row exists per `(player_id, item_id)` pair: the
/// grant is a single atomic insert-or-increment against the pair's unique
/// index, so concurrent grants for the same pair all accumulate.
pub async fn add_item_to_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    item_id: &str,
    quantity: i32,
) -> Result<(), DomainError> {
    if quantity < 1 {
        return Err(DomainError::validation(format!(
            "Item quantity must be at least 1, got {quantity}"
        )));
    }

    let dto = items_adapter::ItemGrant {
        player_id,
        item_id: item_id.to_string(),
        quantity,
    };
    items_adapter::upsert_increment(conn, dto).await?;

    Ok(())
}
