use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_users_table::Users;
use super::m20260301_000002_create_boards_table::Boards;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardUsers::Table)
                    .if_not_exists()
                    .col(uuid(BoardUsers::BoardId))
                    .col(uuid(BoardUsers::UserId))
                    .col(boolean(BoardUsers::IsAdmin).default(false))
                    .primary_key(
                        Index::create()
                            .name("pk_board_users")
                            .col(BoardUsers::BoardId)
                            .col(BoardUsers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_users_board_id")
                            .from(BoardUsers::Table, BoardUsers::BoardId)
                            .to(Boards::Table, Boards::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_users_user_id")
                            .from(BoardUsers::Table, BoardUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardUsers {
    Table,
    BoardId,
    UserId,
    IsAdmin,
}
