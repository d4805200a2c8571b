use serde::{Deserialize, Serialize};

/// The public face of a kitten, used both as the create payload and as the
/// response body. Ids never leave the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KittenBody {
    pub name: String,
    pub age: i32,
    pub color: String,
}

impl From<entity::kitten::Model> for KittenBody {
    fn from(kitten: entity::kitten::Model) -> Self {
        Self {
            name: kitten.name,
            age: kitten.age,
            color: kitten.color,
        }
    }
}

#[derive(Debug)]
pub struct DBKittenCreate {
    pub name: String,
    pub age: i32,
    pub color: String,
    pub owner_id: i32,
}
