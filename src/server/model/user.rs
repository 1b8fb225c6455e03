//! User domain models and parameters.

use uuid::Uuid;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        error::validation::ValidationError,
        validation::{self, FieldRules, Rule, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

impl Validate for CreateUserDto {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "name",
            rules: &[Rule::Required, Rule::Length { min: 2, max: 50 }],
        },
        FieldRules {
            field: "email",
            rules: &[Rule::Required, Rule::Email, Rule::Length { min: 3, max: 254 }],
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
}

impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = ValidationError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let dto = validation::validate(dto)?;

        Ok(Self {
            name: validation::require("name", dto.name)?,
            email: validation::require("email", dto.email)?,
        })
    }
}
