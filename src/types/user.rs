use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub token: String,
}

pub struct DBUserCreate {
    pub username: String,
    pub password_hash: String,
}
