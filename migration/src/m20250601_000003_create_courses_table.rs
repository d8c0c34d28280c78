use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_colleges_table::Colleges;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(integer(Courses::CollegeId))
                    .col(string(Courses::Name))
                    .col(decimal_len(Courses::Fee, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_college_id")
                            .from(Courses::Table, Courses::CollegeId)
                            .to(Colleges::Table, Colleges::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_college_id")
                    .table(Courses::Table)
                    .col(Courses::CollegeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    CollegeId,
    Name,
    Fee,
}
