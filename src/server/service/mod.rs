//! Business logic layer.
//!
//! Services sit between controllers and repositories. They receive validated `*Param`
//! values, decide which writes must be atomic, bound every store call with the configured
//! timeout and translate store failures into `WriteError` or `ReadError`.

pub mod board;
pub mod card;
pub mod list;
pub mod user;

#[cfg(test)]
mod test;
