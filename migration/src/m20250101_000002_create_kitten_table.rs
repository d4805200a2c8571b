use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Kitten {
    Table,
    Id,
    Name,
    Age,
    Color,
    OwnerId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Kitten::Table)
                .if_not_exists()
                .col(ColumnDef::new(Kitten::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Kitten::Name).string().not_null())
                .col(ColumnDef::new(Kitten::Age).integer().not_null())
                .col(ColumnDef::new(Kitten::Color).string().not_null())
                .col(ColumnDef::new(Kitten::OwnerId).integer().not_null())
                .col(ColumnDef::new(Kitten::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_kitten_owner")
                        .from(Kitten::Table, Kitten::OwnerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_kitten_owner_id")
                .table(Kitten::Table)
                .col(Kitten::OwnerId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Index goes with the table
        m.drop_table(Table::drop().table(Kitten::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
