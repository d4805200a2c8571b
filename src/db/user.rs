use crate::db::{database_service::DatabaseService, repository::UserRepository};
use crate::types::{error::AppError, user::DBUserCreate};
use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};

#[async_trait]
impl UserRepository for DatabaseService {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.database_connection)
            .await?)
    }

    async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.find_user_by_username(&payload.username).await?.is_some() {
            return Err(AppError::AlreadyExists);
        }

        let am = UserActive {
            username: Set(payload.username),
            password: Set(payload.password_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match am.insert(&self.database_connection).await {
            Ok(user) => Ok(user),
            Err(err) => {
                // Lost a race with a concurrent registration
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::AlreadyExists);
                }
                Err(err.into())
            }
        }
    }
}
