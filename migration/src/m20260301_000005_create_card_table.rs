use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_list_table::List;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_uuid(Card::Id))
                    .col(string(Card::Title))
                    .col(string(Card::Description))
                    .col(date(Card::DueDate))
                    .col(uuid(Card::ListId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_list_id")
                            .from(Card::Table, Card::ListId)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_list_id")
                    .table(Card::Table)
                    .col(Card::ListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    Title,
    Description,
    DueDate,
    ListId,
}
