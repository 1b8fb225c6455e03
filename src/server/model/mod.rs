//! Domain models and operation-specific parameter types.
//!
//! Domain models are built from entity models at the repository boundary and turned into
//! DTOs at the controller boundary. `*Param` types are the validated form of request DTOs:
//! each `TryFrom<*Dto>` runs the DTO's rule table before any field is parsed.

pub mod board;
pub mod card;
pub mod list;
pub mod user;
