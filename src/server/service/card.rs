use std::time::Duration;

use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::{
    data::{
        card::CardRepository, card_user::CardUserRepository, transaction::AtomicWriter,
    },
    error::{
        store::{ReadError, WriteError},
        AppError,
    },
    model::card::{AssignCardUserParam, Card, CardAssignment, CardWithOwner, CreateCardParam},
    util::timeout::within,
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Creates a card together with its owner membership.
    ///
    /// Both rows are written in one transaction. An unknown list (card insert) or an
    /// unknown owner (membership insert) leaves neither row behind.
    pub async fn create(&self, param: CreateCardParam) -> Result<Card, AppError> {
        let card = AtomicWriter::new(self.db, self.timeout)
            .run(move |txn| {
                Box::pin(async move {
                    let card = CardRepository::new(txn).create(&param).await?;
                    let owner = CardUserRepository::new(txn)
                        .create(card.id, param.owner_user_id, true)
                        .await?;

                    Ok(Card::from_entity(card, owner))
                })
            })
            .await?;

        tracing::info!("Created card {} on list {}", card.id, card.list_id);

        Ok(card)
    }

    /// Links a user to a card if the pair is not linked yet.
    ///
    /// Repeating the call for the same pair succeeds without creating another row. The
    /// returned member is the persisted row in both cases.
    pub async fn assign_user(&self, param: AssignCardUserParam) -> Result<CardAssignment, AppError> {
        let repo = CardUserRepository::new(self.db);

        let created =
            within::<_, WriteError, _>(self.timeout, repo.assign_if_absent(param)).await?;

        let member = within::<_, WriteError, _>(
            self.timeout,
            repo.find(param.card_id, param.user_id),
        )
        .await?
        .ok_or_else(|| {
            WriteError::Store(DbErr::RecordNotFound(format!(
                "Card membership ({}, {}) not found after assignment",
                param.card_id, param.user_id
            )))
        })?;

        if created {
            tracing::info!("Assigned user {} to card {}", param.user_id, param.card_id);
        } else {
            tracing::debug!(
                "User {} already assigned to card {}",
                param.user_id,
                param.card_id
            );
        }

        Ok(CardAssignment { member, created })
    }

    /// Gets the cards of a list with their owners' names.
    pub async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<CardWithOwner>, AppError> {
        let cards = within::<_, ReadError, _>(
            self.timeout,
            CardRepository::new(self.db).get_by_list_with_owner(list_id),
        )
        .await?;

        Ok(cards)
    }
}
