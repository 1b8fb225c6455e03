//! Card membership repository.
//!
//! Two insert flavours exist: `create` is a strict insert used while creating a card, and
//! `assign_if_absent` is the idempotent conditional insert used for assigning users.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::card::{AssignCardUserParam, CardMember};

pub struct CardUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership row; fails if the pair already exists.
    pub async fn create(
        &self,
        card_id: Uuid,
        user_id: Uuid,
        is_owner: bool,
    ) -> Result<entity::card_user::Model, DbErr> {
        entity::card_user::ActiveModel {
            card_id: ActiveValue::Set(card_id),
            user_id: ActiveValue::Set(user_id),
            is_owner: ActiveValue::Set(is_owner),
        }
        .insert(self.db)
        .await
    }

    /// Links a user to a card unless the pair is already linked.
    ///
    /// The existence check and the insert are one `INSERT .. ON CONFLICT DO NOTHING`
    /// statement against the `(card_id, user_id)` key, so concurrent callers for the same
    /// pair cannot both insert. An existing link is left untouched, including its
    /// `is_owner` flag.
    ///
    /// # Returns
    /// - `Ok(true)` - The link was inserted by this call
    /// - `Ok(false)` - The link already existed
    /// - `Err(DbErr)` - Database error, including an unknown card or user
    pub async fn assign_if_absent(&self, param: AssignCardUserParam) -> Result<bool, DbErr> {
        let inserted = entity::prelude::CardUser::insert(entity::card_user::ActiveModel {
            card_id: ActiveValue::Set(param.card_id),
            user_id: ActiveValue::Set(param.user_id),
            is_owner: ActiveValue::Set(param.is_owner),
        })
        .on_conflict(
            OnConflict::columns([
                entity::card_user::Column::CardId,
                entity::card_user::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    pub async fn find(&self, card_id: Uuid, user_id: Uuid) -> Result<Option<CardMember>, DbErr> {
        let entity = entity::prelude::CardUser::find_by_id((card_id, user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CardMember::from_entity))
    }
}
