use actix_web::{delete, web};
use tracing::info;

use super::owned_kitten;
use crate::db::repository::KittenRepository;
use crate::state::AppState;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[delete("/{id}")]
async fn delete_kitten(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
) -> ApiResult<()> {
    let kitten = owned_kitten(&state, &user, path.into_inner()).await?;

    state.store.delete_kitten(kitten.id).await?;
    info!(kitten = kitten.id, "kitten deleted");

    Ok(ApiResponse::NoContent)
}
