use async_trait::async_trait;
use entity::{kitten::Model as KittenModel, user::Model as UserModel};

use crate::types::{error::AppError, kitten::DBKittenCreate, user::DBUserCreate};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError>;

    /// Fails with `AlreadyExists` when the username is taken.
    async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError>;
}

#[async_trait]
pub trait KittenRepository: Send + Sync {
    async fn find_kitten_by_id(&self, id: i32) -> Result<Option<KittenModel>, AppError>;

    async fn create_kitten(&self, payload: DBKittenCreate) -> Result<KittenModel, AppError>;

    /// Fails with `NotFound` when nothing was deleted.
    async fn delete_kitten(&self, id: i32) -> Result<(), AppError>;
}

/// The full storage surface handlers are written against.
pub trait Store: UserRepository + KittenRepository {}

impl<T: UserRepository + KittenRepository> Store for T {}
