use super::LIMIT;
use crate::server::{
    error::AppError,
    model::card::{AssignCardUserParam, CreateCardParam},
    service::card::CardService,
};
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod assign_user;
mod create;

fn card_param(list_id: Uuid, owner_user_id: Uuid) -> CreateCardParam {
    CreateCardParam {
        title: "Deploy".to_string(),
        description: "Ship the release to production".to_string(),
        due_date: NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
        list_id,
        owner_user_id,
    }
}
