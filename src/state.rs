use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::repository::Store;
use crate::utils::token::TokenService;

/// Everything a handler needs, injected through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: &EnvConfig) -> Self {
        Self {
            store,
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl_secs),
        }
    }
}
