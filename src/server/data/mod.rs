//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so the same
//! repository runs against the shared pool or inside a transaction opened by
//! `transaction::AtomicWriter`. They use SeaORM entity models internally and return
//! entity or domain models to the service layer.

pub mod board;
pub mod card;
pub mod card_user;
pub mod list;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
