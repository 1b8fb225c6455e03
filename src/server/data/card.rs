//! Card repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::model::card::{CardWithOwner, CreateCardParam};

pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a card row with a freshly generated id.
    ///
    /// Callers pair this with an owner insert inside an `AtomicWriter`.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including an unknown `list_id`
    pub async fn create(&self, param: &CreateCardParam) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(param.title.clone()),
            description: ActiveValue::Set(param.description.clone()),
            due_date: ActiveValue::Set(param.due_date),
            list_id: ActiveValue::Set(param.list_id),
        }
        .insert(self.db)
        .await
    }

    /// Gets the cards of a list joined with their owners' names.
    ///
    /// Cards are ordered by due date; a card appears once per owner membership.
    pub async fn get_by_list_with_owner(&self, list_id: Uuid) -> Result<Vec<CardWithOwner>, DbErr> {
        entity::prelude::Card::find()
            .select_only()
            .columns([
                entity::card::Column::Id,
                entity::card::Column::Title,
                entity::card::Column::Description,
                entity::card::Column::DueDate,
                entity::card::Column::ListId,
            ])
            .column_as(entity::user::Column::Name, "owner_name")
            .join(JoinType::InnerJoin, entity::card::Relation::CardUser.def())
            .join(JoinType::InnerJoin, entity::card_user::Relation::User.def())
            .filter(entity::card::Column::ListId.eq(list_id))
            .filter(entity::card_user::Column::IsOwner.eq(true))
            .order_by_asc(entity::card::Column::DueDate)
            .into_model::<CardWithOwner>()
            .all(self.db)
            .await
    }
}
