//! DTOs for player_items_sea adapter.

/// DTO for granting items to a player.
#[derive(Debug, Clone)]
pub struct ItemGrant {
    pub player_id: i64,
    pub item_id: String,
    pub quantity: i32,
}
