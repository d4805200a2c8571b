use std::sync::Arc;

use actix_web::web;
use cyber_kittens::{
    config::EnvConfig,
    db::database_service::DatabaseService,
    state::AppState,
};

pub mod client;

pub const TEST_SECRET: &str = "test_jwt_secret";

pub struct TestContext {
    pub state: web::Data<AppState>,
}

impl TestContext {
    /// Fresh in-memory database per test, with the real migrations applied.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService")
        );

        let state = web::Data::new(AppState::new(db, &get_test_config()));

        TestContext { state }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_secs: 3600,
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use cyber_kittens::types::kitten::KittenBody;
    use cyber_kittens::types::user::RCredentials;

    pub fn tom() -> KittenBody {
        KittenBody {
            name: "Tom".to_string(),
            age: 2,
            color: "gray".to_string(),
        }
    }

    pub fn credentials(username: &str, password: &str) -> RCredentials {
        RCredentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
