use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_boards_table::Boards;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(List::Table)
                    .if_not_exists()
                    .col(pk_uuid(List::Id))
                    .col(string(List::Name))
                    .col(uuid(List::BoardId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_board_id")
                            .from(List::Table, List::BoardId)
                            .to(Boards::Table, Boards::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_list_board_id")
                    .table(List::Table)
                    .col(List::BoardId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(List::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum List {
    Table,
    Id,
    Name,
    BoardId,
}
