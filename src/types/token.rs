use serde::{Deserialize, Serialize};

/// Claims carried by every bearer token this service issues.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Id of the user the token was issued to.
    pub id: i32,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}
