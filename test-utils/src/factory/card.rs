//! Card factory for creating cards with their owner membership.

use crate::factory::helpers::{alpha_suffix, next_id};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test cards.
///
/// Inserts the card row followed by an owner `card_users` row for `owner_id`.
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    due_date: NaiveDate,
    list_id: Uuid,
    owner_id: Uuid,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Card{letters}"`
    /// - description: a fixed 30 character sentence
    /// - due_date: one week from today
    pub fn new(db: &'a DatabaseConnection, list_id: Uuid, owner_id: Uuid) -> Self {
        Self {
            db,
            title: format!("Card{}", alpha_suffix(next_id())),
            description: "Factory generated card details".to_string(),
            due_date: (Utc::now() + Duration::days(7)).date_naive(),
            list_id,
            owner_id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Builds and inserts the card and owner membership.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let card = entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            due_date: ActiveValue::Set(self.due_date),
            list_id: ActiveValue::Set(self.list_id),
        }
        .insert(self.db)
        .await?;

        entity::card_user::ActiveModel {
            card_id: ActiveValue::Set(card.id),
            user_id: ActiveValue::Set(self.owner_id),
            is_owner: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await?;

        Ok(card)
    }
}

/// Creates a card on the given list owned by `owner_id`.
pub async fn create_card(
    db: &DatabaseConnection,
    list_id: Uuid,
    owner_id: Uuid,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, list_id, owner_id).build().await
}
