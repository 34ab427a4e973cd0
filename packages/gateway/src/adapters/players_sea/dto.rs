//! DTOs for players_sea adapter.

/// DTO for creating a player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub username: String,
}

/// DTO for partially updating a player; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerPatch {
    pub username: Option<String>,
}
