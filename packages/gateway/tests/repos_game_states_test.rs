mod common;

use player_gateway::entities::game_states;
use player_gateway::repos::game_states::{self as game_states_repo, GameStateData};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

#[tokio::test]
async fn test_load_returns_most_recent_state() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "saver").await;

    let first_map = json!({"rooms": 4, "depth": 1});
    let first_entities = json!([{"kind": "goblin", "hp": 7}]);
    game_states_repo::save_game_state(
        &db,
        GameStateData {
            player_id: player.id,
            dungeon_map: first_map,
            entities: first_entities,
        },
    )
    .await
    .expect("save first state");

    let second_map = json!({"rooms": 6, "depth": 2});
    let second_entities = json!([{"kind": "dragon", "hp": 120}]);
    game_states_repo::save_game_state(
        &db,
        GameStateData {
            player_id: player.id,
            dungeon_map: second_map.clone(),
            entities: second_entities.clone(),
        },
    )
    .await
    .expect("save second state");

    let loaded = game_states_repo::load_game_state(&db, player.id)
        .await
        .expect("load state")
        .expect("state exists");

    assert_eq!(loaded.player_id, player.id);
    assert_eq!(loaded.dungeon_map, second_map);
    assert_eq!(loaded.entities, second_entities);
}

#[tokio::test]
async fn test_load_without_state_is_none() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "fresh").await;

    let loaded = game_states_repo::load_game_state(&db, player.id)
        .await
        .expect("load state");

    assert_eq!(loaded, None);
}

#[tokio::test]
async fn test_states_are_append_only() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "hoarder").await;

    for depth in 1..=3 {
        game_states_repo::save_game_state(
            &db,
            GameStateData {
                player_id: player.id,
                dungeon_map: json!({"depth": depth}),
                entities: json!([]),
            },
        )
        .await
        .expect("save state");
    }

    // Every save lands as its own row; nothing is updated in place.
    let rows = game_states::Entity::find()
        .filter(game_states::Column::PlayerId.eq(player.id))
        .all(&db)
        .await
        .expect("list state rows");
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn test_states_are_scoped_per_player() {
    let db = common::setup_db().await;
    let alice = common::create_test_player(&db, "alice").await;
    let bob = common::create_test_player(&db, "bob").await;

    game_states_repo::save_game_state(
        &db,
        GameStateData {
            player_id: alice.id,
            dungeon_map: json!({"owner": "alice"}),
            entities: json!([]),
        },
    )
    .await
    .expect("save alice state");

    let loaded = game_states_repo::load_game_state(&db, bob.id)
        .await
        .expect("load bob state");
    assert_eq!(loaded, None);

    let alice_state = game_states_repo::load_game_state(&db, alice.id)
        .await
        .expect("load alice state")
        .expect("alice has state");
    assert_eq!(alice_state.dungeon_map, json!({"owner": "alice"}));
}
