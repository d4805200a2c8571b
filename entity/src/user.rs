use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,                 // argon2 PHC string, never the plaintext
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kitten::Entity")]
    Kitten,
}

impl Related<super::kitten::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kitten.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
