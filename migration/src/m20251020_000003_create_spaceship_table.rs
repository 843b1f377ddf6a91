use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spaceship::Table)
                    .if_not_exists()
                    .col(pk_auto(Spaceship::Id))
                    .col(string_len_uniq(Spaceship::Name, 120))
                    .col(string_len_null(Spaceship::Model, 80))
                    .col(string_len_null(Spaceship::Manufacturer, 80))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Spaceship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Spaceship {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
}
