use crate::db::{database_service::DatabaseService, repository::KittenRepository};
use crate::types::{error::AppError, kitten::DBKittenCreate};
use async_trait::async_trait;
use chrono::Utc;
use entity::kitten::{ActiveModel as KittenActive, Entity as Kitten, Model as KittenModel};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, SqlErr};

#[async_trait]
impl KittenRepository for DatabaseService {
    async fn find_kitten_by_id(&self, id: i32) -> Result<Option<KittenModel>, AppError> {
        Ok(Kitten::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    async fn create_kitten(&self, payload: DBKittenCreate) -> Result<KittenModel, AppError> {
        let am = KittenActive {
            name: Set(payload.name),
            age: Set(payload.age),
            color: Set(payload.color),
            owner_id: Set(payload.owner_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match am.insert(&self.database_connection).await {
            Ok(kitten) => Ok(kitten),
            Err(err) => {
                if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::BadRequest("Owner does not exist".to_string()));
                }
                Err(err.into())
            }
        }
    }

    async fn delete_kitten(&self, id: i32) -> Result<(), AppError> {
        let res = Kitten::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
