use actix_web::{post, web};

use crate::db::repository::UserRepository;
use crate::state::AppState;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RCredentials, TokenRes};
use crate::utils::token::verify_password;
use crate::utils::webutils::{payload, JsonOrForm};

#[post("")]
async fn login(
    state: web::Data<AppState>,
    body: JsonOrForm<RCredentials>,
) -> ApiResult<TokenRes> {
    let RCredentials { username, password } = payload(body);

    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("username and password are required".to_string()));
    }

    // Unknown user and wrong password look the same to the caller
    let user = state
        .store
        .find_user_by_username(username.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    let matches = verify_password(&password, &user.password)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;
    if !matches {
        return Err(AppError::Unauthorized);
    }

    Ok(ApiResponse::Ok(TokenRes {
        token: state.tokens.issue(&user)?,
    }))
}
