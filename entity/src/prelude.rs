pub use super::board::Entity as Board;
pub use super::board_user::Entity as BoardUser;
pub use super::card::Entity as Card;
pub use super::card_user::Entity as CardUser;
pub use super::list::Entity as List;
pub use super::user::Entity as User;
