pub mod game_states;
pub mod player_items;
pub mod players;
pub mod scores;

pub use game_states::Entity as GameStates;
pub use game_states::Model as GameState;
pub use player_items::Entity as PlayerItems;
pub use player_items::Model as PlayerItem;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use scores::Entity as Scores;
pub use scores::Model as Score;
