use entity::kitten::Model as KittenModel;

use crate::db::repository::KittenRepository;
use crate::state::AppState;
use crate::types::error::AppError;
use crate::utils::webutils::CurrentUser;

pub mod create;
pub mod delete;
pub mod get;

/// Looks a kitten up and checks it belongs to the caller. Existence is
/// checked first, so a missing kitten is a 404 whoever asks.
async fn owned_kitten(state: &AppState, user: &CurrentUser, id: i32) -> Result<KittenModel, AppError> {
    let kitten = state
        .store
        .find_kitten_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    if user.id() != Some(kitten.owner_id) {
        return Err(AppError::Forbidden);
    }

    Ok(kitten)
}
