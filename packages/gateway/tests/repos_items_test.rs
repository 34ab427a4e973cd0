mod common;

use player_gateway::adapters::player_items_sea;
use player_gateway::entities::player_items;
use player_gateway::errors::domain::DomainError;
use player_gateway::repos::items::{self, DEFAULT_ITEM_QUANTITY};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::test]
async fn test_sequential_grants_accumulate_in_one_row() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "collector").await;

    items::add_item_to_player(&db, player.id, "healing-potion", 3)
        .await
        .expect("grant 3");
    items::add_item_to_player(&db, player.id, "healing-potion", 2)
        .await
        .expect("grant 2");

    let row = player_items_sea::find_by_player_and_item(&db, player.id, "healing-potion")
        .await
        .expect("find item row")
        .expect("row exists");
    assert_eq!(row.quantity, 5);

    // The unique pair index keeps it to one row.
    let rows = player_items::Entity::find()
        .filter(player_items::Column::PlayerId.eq(player.id))
        .filter(player_items::Column::ItemId.eq("healing-potion"))
        .all(&db)
        .await
        .expect("list item rows");
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_default_quantity_grants_single_item() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "walker").await;

    items::add_item_to_player(&db, player.id, "torch", DEFAULT_ITEM_QUANTITY)
        .await
        .expect("grant default quantity");

    let row = player_items_sea::find_by_player_and_item(&db, player.id, "torch")
        .await
        .expect("find item row")
        .expect("row exists");
    assert_eq!(row.quantity, 1);
}

#[tokio::test]
async fn test_non_positive_quantity_is_rejected() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "cheater").await;

    for quantity in [0, -2] {
        let result = items::add_item_to_player(&db, player.id, "gold-coin", quantity).await;
        match result {
            Err(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error for {quantity}, got {other:?}"),
        }
    }

    let row = player_items_sea::find_by_player_and_item(&db, player.id, "gold-coin")
        .await
        .expect("find item row");
    assert_eq!(row, None);
}

#[tokio::test]
async fn test_concurrent_grants_both_land() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "racer").await;

    let db_a = db.clone();
    let db_b = db.clone();
    let (a, b) = tokio::join!(
        items::add_item_to_player(&db_a, player.id, "rusty-key", 1),
        items::add_item_to_player(&db_b, player.id, "rusty-key", 1),
    );
    a.expect("first concurrent grant");
    b.expect("second concurrent grant");

    let row = player_items_sea::find_by_player_and_item(&db, player.id, "rusty-key")
        .await
        .expect("find item row")
        .expect("row exists");
    assert_eq!(row.quantity, 2);
}

#[tokio::test]
async fn test_distinct_items_get_distinct_rows() {
    let db = common::setup_db().await;
    let player = common::create_test_player(&db, "pack-rat").await;

    items::add_item_to_player(&db, player.id, "sword", 1)
        .await
        .expect("grant sword");
    items::add_item_to_player(&db, player.id, "shield", 1)
        .await
        .expect("grant shield");

    let rows = player_items::Entity::find()
        .filter(player_items::Column::PlayerId.eq(player.id))
        .all(&db)
        .await
        .expect("list item rows");
    assert_eq!(rows.len(), 2);
}
