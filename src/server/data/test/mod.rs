mod board;
mod card;
mod card_user;
mod transaction;
