#![allow(dead_code)]

// tests/common/mod.rs
use gateway_test_support::unique_helpers::unique_username;
use player_gateway::repos::players::{self, Player};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    gateway_test_support::logging::init();
}

/// Schema mirroring the remote store, for in-memory SQLite test runs.
///
/// Unique indexes are created separately (with their Postgres constraint
/// names) so individual tests can drop one to simulate a store that lost
/// the guarantee.
const SCHEMA: &[&str] = &[
    "CREATE TABLE players (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL
    )",
    "CREATE UNIQUE INDEX players_username_key ON players (username)",
    "CREATE TABLE game_states (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        player_id INTEGER NOT NULL REFERENCES players (id),
        dungeon_map JSON NOT NULL,
        entities JSON NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE player_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        player_id INTEGER NOT NULL REFERENCES players (id),
        item_id TEXT NOT NULL,
        quantity INTEGER NOT NULL
    )",
    "CREATE UNIQUE INDEX player_items_player_id_item_id_key
        ON player_items (player_id, item_id)",
    "CREATE TABLE scores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        player_id INTEGER NOT NULL REFERENCES players (id),
        level_reached INTEGER NOT NULL,
        enemies_defeated INTEGER NOT NULL,
        treasures_collected INTEGER NOT NULL,
        score INTEGER NOT NULL
    )",
];

/// Fresh in-memory database with the gateway schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // A single pooled connection so every statement sees the same
    // in-memory file.
    opts.min_connections(1).max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");

    for stmt in SCHEMA {
        db.execute_unprepared(stmt).await.expect("apply test schema");
    }

    db
}

/// Create a player with a unique username derived from `prefix`.
pub async fn create_test_player(db: &DatabaseConnection, prefix: &str) -> Player {
    let username = unique_username(prefix);
    players::create_player(db, &username)
        .await
        .expect("create test player")
}
