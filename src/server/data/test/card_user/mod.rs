use crate::server::{data::card_user::CardUserRepository, model::card::AssignCardUserParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod assign_if_absent;
mod find;

fn assignment(card_id: Uuid, user_id: Uuid) -> AssignCardUserParam {
    AssignCardUserParam {
        card_id,
        user_id,
        is_owner: false,
    }
}
