use actix_web::{post, web};
use tracing::info;

use crate::db::repository::UserRepository;
use crate::state::AppState;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RCredentials, TokenRes};
use crate::utils::token::hash_password;
use crate::utils::webutils::{payload, JsonOrForm};

#[post("")]
async fn register(
    state: web::Data<AppState>,
    body: JsonOrForm<RCredentials>,
) -> ApiResult<TokenRes> {
    let RCredentials { username, password } = payload(body);
    let username = username.trim().to_string();

    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation("username and password are required".to_string()));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = state
        .store
        .create_user(DBUserCreate { username, password_hash })
        .await?;

    info!(user = user.id, "user registered");

    Ok(ApiResponse::Created(TokenRes {
        token: state.tokens.issue(&user)?,
    }))
}
