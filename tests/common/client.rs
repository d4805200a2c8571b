use actix_web::web;
use chrono::Utc;
use cyber_kittens::{
    db::repository::{KittenRepository, UserRepository},
    state::AppState,
    types::{kitten::{DBKittenCreate, KittenBody}, token::Claims, user::DBUserCreate},
    utils::token::hash_password,
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};

pub struct TestClient {
    pub state: web::Data<AppState>,
}

impl TestClient {
    pub fn new(state: web::Data<AppState>) -> Self {
        TestClient { state }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        cyber_kittens::create_app(self.state.clone())
    }

    /// Inserts a user straight into the store and returns its id with a valid token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str) -> (i32, String) {
        let password_hash = hash_password("password").expect("Failed to hash password");

        let user = self.state.store.create_user(DBUserCreate {
            username: username.to_string(),
            password_hash,
        }).await.expect("Failed to create user");

        let token = self.state.tokens.issue(&user).expect("Failed to issue token");

        (user.id, token)
    }

    #[allow(dead_code)]
    pub async fn create_test_kitten(&self, owner_id: i32, kitten: KittenBody) -> i32 {
        self.state.store.create_kitten(DBKittenCreate {
            name: kitten.name,
            age: kitten.age,
            color: kitten.color,
            owner_id,
        }).await.expect("Failed to create kitten").id
    }
}

/// Signs arbitrary claims, for tokens the service itself would never hand out.
#[allow(dead_code)]
pub fn forge_token(user_id: i32, expires_in_secs: i64, secret: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        id: user_id,
        username: format!("ghost-{user_id}"),
        iat: now,
        exp: now + expires_in_secs,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}
