//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row take its id, and the
//! `helpers` module builds whole parent chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let board = factory::board::create_board(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, board, list, card) = factory::helpers::create_card_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Ana")
//!     .email("ana@example.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `board` - Create boards together with an admin membership
//! - `list` - Create list entities
//! - `card` - Create cards together with an owner membership
//! - `helpers` - Id counter and convenience methods for creating entities with dependencies

pub mod board;
pub mod card;
pub mod helpers;
pub mod list;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use board::create_board;
pub use card::create_card;
pub use list::create_list;
pub use user::create_user;
