//! HTTP request handlers.
//!
//! Each handler parses its input, converts the request DTO into a validated `*Param`
//! (rejecting with 422 before the store is touched), calls a service and maps the result
//! to a status code and DTO. Handlers never retry; every failure ends the request.

pub mod board;
pub mod card;
pub mod list;
pub mod user;

#[cfg(test)]
mod test;
