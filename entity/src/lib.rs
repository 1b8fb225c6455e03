//! SeaORM entity models for the task board schema.
//!
//! Each module mirrors one table created by the `migration` crate. Membership tables
//! (`board_users`, `card_users`) use a composite primary key over the linked ids, which
//! is what makes a user-to-board or user-to-card link unique at the store level.

pub mod prelude;

pub mod board;
pub mod board_user;
pub mod card;
pub mod card_user;
pub mod list;
pub mod user;
