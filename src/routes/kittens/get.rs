use actix_web::{get, web};

use super::owned_kitten;
use crate::state::AppState;
use crate::types::kitten::KittenBody;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[get("/{id}")]
async fn get_kitten(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
) -> ApiResult<KittenBody> {
    let kitten = owned_kitten(&state, &user, path.into_inner()).await?;

    Ok(ApiResponse::Ok(KittenBody::from(kitten)))
}
