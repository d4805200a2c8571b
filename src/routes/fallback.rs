use actix_web::web;

use crate::state::AppState;
use crate::types::error::AppError;
use crate::utils::webutils::{authenticate, Credential};

/// Anything outside the public routes sits behind the guard, so an unknown
/// path only reports 404 to an authenticated caller.
pub async fn not_found(
    state: web::Data<AppState>,
    credential: Option<Credential>,
) -> Result<actix_web::HttpResponse, AppError> {
    authenticate(&state, credential).await?;
    Err(AppError::NotFound)
}
