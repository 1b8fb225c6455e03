use std::time::Duration;

mod board;
mod card;
mod list;
mod user;

const LIMIT: Duration = Duration::from_secs(5);
