use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warrior::Table)
                    .if_not_exists()
                    .col(pk_auto(Warrior::Id))
                    .col(string_len_uniq(Warrior::Name, 120))
                    .col(string_len_null(Warrior::Species, 80))
                    .col(string_len_null(Warrior::Rank, 80))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Warrior::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Warrior {
    Table,
    Id,
    Name,
    Species,
    Rank,
}
