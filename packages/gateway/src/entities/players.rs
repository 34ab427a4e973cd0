use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_states::Entity")]
    GameStates,
    #[sea_orm(has_many = "super::player_items::Entity")]
    PlayerItems,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::game_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameStates.def()
    }
}

impl Related<super::player_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerItems.def()
    }
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
