//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including counter-based unique names and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Turns a counter value into a letters-only suffix.
///
/// List names and card titles must be alphabetic, so digits cannot be used to keep
/// factory-generated names unique.
pub fn alpha_suffix(mut n: u64) -> String {
    let mut suffix = String::new();
    loop {
        suffix.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    suffix
}

/// Creates a user, a board administered by that user, and a list on the board.
///
/// # Returns
/// - `Ok((user, board, list))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_list_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::board::Model,
        entity::list::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let board = crate::factory::board::create_board(db, user.id).await?;
    let list = crate::factory::list::create_list(db, board.id).await?;

    Ok((user, board, list))
}

/// Creates a complete card hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (board admin and card owner)
/// 2. Board
/// 3. List
/// 4. Card
///
/// # Returns
/// - `Ok((user, board, list, card))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_card_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::board::Model,
        entity::list::Model,
        entity::card::Model,
    ),
    DbErr,
> {
    let (user, board, list) = create_list_with_dependencies(db).await?;
    let card = crate::factory::card::create_card(db, list.id, user.id).await?;

    Ok((user, board, list, card))
}
