//! List domain models and parameters.

use uuid::Uuid;

use crate::{
    model::list::{CreateListDto, ListDto},
    server::{
        error::validation::ValidationError,
        validation::{self, FieldRules, Rule, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub id: Uuid,
    pub name: String,
    pub board_id: Uuid,
}

impl List {
    pub fn into_dto(self) -> ListDto {
        ListDto {
            id: self.id,
            name: self.name,
            board_id: self.board_id,
        }
    }

    pub fn from_entity(entity: entity::list::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            board_id: entity.board_id,
        }
    }
}

impl Validate for CreateListDto {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "name",
            rules: &[Rule::Required, Rule::Alpha, Rule::Length { min: 5, max: 30 }],
        },
        FieldRules {
            field: "boardId",
            rules: &[Rule::Required, Rule::Uuid],
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "boardId" => self.board_id.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateListParam {
    pub name: String,
    pub board_id: Uuid,
}

impl TryFrom<CreateListDto> for CreateListParam {
    type Error = ValidationError;

    fn try_from(dto: CreateListDto) -> Result<Self, Self::Error> {
        let dto = validation::validate(dto)?;

        Ok(Self {
            name: validation::require("name", dto.name)?,
            board_id: validation::require_uuid("boardId", dto.board_id)?,
        })
    }
}
