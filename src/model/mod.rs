//! JSON data transfer objects forming the HTTP contract.
//!
//! Request DTOs keep every field optional so that a missing field reaches the validator
//! and is reported as a `required` violation instead of failing deserialization.

pub mod api;
pub mod board;
pub mod card;
pub mod list;
pub mod user;
