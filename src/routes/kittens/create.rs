use actix_web::{post, web};
use tracing::info;

use crate::db::repository::KittenRepository;
use crate::state::AppState;
use crate::types::error::AppError;
use crate::types::kitten::{DBKittenCreate, KittenBody};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::{payload, CurrentUser, JsonOrForm};

#[post("")]
async fn create_kitten(
    state: web::Data<AppState>,
    user: CurrentUser,
    data: JsonOrForm<KittenBody>,
) -> ApiResult<KittenBody> {
    let owner_id = user.id().ok_or(AppError::Unauthorized)?;
    let data = payload(data);

    let kitten = state
        .store
        .create_kitten(DBKittenCreate {
            name: data.name,
            age: data.age,
            color: data.color,
            owner_id,
        })
        .await?;

    info!(kitten = kitten.id, owner = owner_id, "kitten created");

    Ok(ApiResponse::Created(KittenBody::from(kitten)))
}
