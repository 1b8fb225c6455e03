//! Board domain models and parameters.

use uuid::Uuid;

use crate::{
    model::board::{BoardDto, CreateBoardDto},
    server::{
        error::validation::ValidationError,
        validation::{self, FieldRules, Rule, Validate},
    },
};

/// A board paired with one of its admins.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub admin_user_id: Uuid,
}

impl Board {
    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            name: self.name,
            admin_user_id: self.admin_user_id,
        }
    }

    /// Builds a board from its row and the admin membership row.
    pub fn from_entity(
        board: entity::board::Model,
        membership: entity::board_user::Model,
    ) -> Self {
        Self {
            id: board.id,
            name: board.name,
            admin_user_id: membership.user_id,
        }
    }
}

impl Validate for CreateBoardDto {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "name",
            rules: &[Rule::Required, Rule::Length { min: 5, max: 30 }],
        },
        FieldRules {
            field: "adminUserId",
            rules: &[Rule::Required, Rule::Uuid],
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "adminUserId" => self.admin_user_id.as_deref(),
            _ => None,
        }
    }
}

/// Parameters for creating a board with its initial admin.
#[derive(Debug, Clone)]
pub struct CreateBoardParam {
    pub name: String,
    /// User who receives the board's admin membership.
    pub admin_user_id: Uuid,
}

impl TryFrom<CreateBoardDto> for CreateBoardParam {
    type Error = ValidationError;

    fn try_from(dto: CreateBoardDto) -> Result<Self, Self::Error> {
        let dto = validation::validate(dto)?;

        Ok(Self {
            name: validation::require("name", dto.name)?,
            admin_user_id: validation::require_uuid("adminUserId", dto.admin_user_id)?,
        })
    }
}
