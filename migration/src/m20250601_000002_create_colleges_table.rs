use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colleges::Table)
                    .if_not_exists()
                    .col(pk_auto(Colleges::Id))
                    .col(string(Colleges::Name))
                    // Lower-cased name; makes case-insensitive duplicates a constraint violation
                    .col(string_uniq(Colleges::NameKey))
                    .col(string(Colleges::Location))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Colleges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Colleges {
    Table,
    Id,
    Name,
    NameKey,
    Location,
}
