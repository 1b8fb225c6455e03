use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_users_table::Users;
use super::m20260301_000005_create_card_table::Card;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite key is the conflict target for conditional card assignment
        manager
            .create_table(
                Table::create()
                    .table(CardUsers::Table)
                    .if_not_exists()
                    .col(uuid(CardUsers::CardId))
                    .col(uuid(CardUsers::UserId))
                    .col(boolean(CardUsers::IsOwner).default(false))
                    .primary_key(
                        Index::create()
                            .name("pk_card_users")
                            .col(CardUsers::CardId)
                            .col(CardUsers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_users_card_id")
                            .from(CardUsers::Table, CardUsers::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_users_user_id")
                            .from(CardUsers::Table, CardUsers::UserId)
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
            .drop_table(Table::drop().table(CardUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardUsers {
    Table,
    CardId,
    UserId,
    IsOwner,
}
