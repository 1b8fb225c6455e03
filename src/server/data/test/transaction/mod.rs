use std::time::Duration;

use crate::server::{
    data::{
        board::{BoardRepository, BoardUserRepository},
        transaction::AtomicWriter,
    },
    error::store::WriteError,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;


const LIMIT: Duration = Duration::from_secs(5);
