//! List repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::list::{CreateListParam, List};

pub struct ListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a list; an unknown `board_id` fails on the foreign key.
    pub async fn create(&self, param: CreateListParam) -> Result<List, DbErr> {
        let entity = entity::list::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            board_id: ActiveValue::Set(param.board_id),
        }
        .insert(self.db)
        .await?;

        Ok(List::from_entity(entity))
    }

    /// Gets the lists of a board ordered by name. Unknown boards yield an empty list.
    pub async fn get_by_board(&self, board_id: Uuid) -> Result<Vec<List>, DbErr> {
        let entities = entity::prelude::List::find()
            .filter(entity::list::Column::BoardId.eq(board_id))
            .order_by_asc(entity::list::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(List::from_entity).collect())
    }
}
