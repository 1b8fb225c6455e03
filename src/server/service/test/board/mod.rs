use super::LIMIT;
use crate::server::{
    error::AppError, model::board::CreateBoardParam, service::board::BoardService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_all;
