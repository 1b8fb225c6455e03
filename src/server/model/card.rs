//! Card domain models and parameters.
//!
//! Covers card creation (card plus owner membership) and card-user assignment.

use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use uuid::Uuid;

use crate::{
    model::card::{AssignCardUserDto, CardDto, CardMemberDto, CardWithOwnerDto, CreateCardDto},
    server::{
        error::validation::ValidationError,
        validation::{self, FieldRules, Rule, Validate},
    },
};

/// A card paired with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub list_id: Uuid,
    pub owner_user_id: Uuid,
}

impl Card {
    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            titulo: self.title,
            descripcion: self.description,
            fecha_tope: self.due_date,
            list_id: self.list_id,
            owner_user_id: self.owner_user_id,
        }
    }

    /// Builds a card from its row and the owner membership row.
    pub fn from_entity(card: entity::card::Model, membership: entity::card_user::Model) -> Self {
        Self {
            id: card.id,
            title: card.title,
            description: card.description,
            due_date: card.due_date,
            list_id: card.list_id,
            owner_user_id: membership.user_id,
        }
    }
}

/// Card listing row joined with the owner's name.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CardWithOwner {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub list_id: Uuid,
    pub owner_name: String,
}

impl CardWithOwner {
    pub fn into_dto(self) -> CardWithOwnerDto {
        CardWithOwnerDto {
            id: self.id,
            titulo: self.title,
            descripcion: self.description,
            fecha_tope: self.due_date,
            list_id: self.list_id,
            owner_name: self.owner_name,
        }
    }
}

/// A user's link to a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMember {
    pub card_id: Uuid,
    pub user_id: Uuid,
    pub is_owner: bool,
}

impl CardMember {
    pub fn into_dto(self) -> CardMemberDto {
        CardMemberDto {
            card_id: self.card_id,
            user_id: self.user_id,
            is_owner: self.is_owner,
        }
    }

    pub fn from_entity(entity: entity::card_user::Model) -> Self {
        Self {
            card_id: entity.card_id,
            user_id: entity.user_id,
            is_owner: entity.is_owner,
        }
    }
}

/// Outcome of a conditional card assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct CardAssignment {
    /// The persisted link, new or pre-existing.
    pub member: CardMember,
    /// Whether this call inserted the link.
    pub created: bool,
}

impl Validate for CreateCardDto {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "titulo",
            rules: &[Rule::Required, Rule::Alpha, Rule::Length { min: 5, max: 30 }],
        },
        FieldRules {
            field: "descripcion",
            rules: &[Rule::Required, Rule::Length { min: 20, max: 50 }],
        },
        FieldRules {
            field: "fecha_tope",
            rules: &[Rule::Required, Rule::Date],
        },
        FieldRules {
            field: "listId",
            rules: &[Rule::Required, Rule::Uuid],
        },
        FieldRules {
            field: "adminUserId",
            rules: &[Rule::Required, Rule::Uuid],
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "titulo" => self.titulo.as_deref(),
            "descripcion" => self.descripcion.as_deref(),
            "fecha_tope" => self.fecha_tope.as_deref(),
            "listId" => self.list_id.as_deref(),
            "adminUserId" => self.admin_user_id.as_deref(),
            _ => None,
        }
    }
}

/// Parameters for creating a card with its initial owner.
#[derive(Debug, Clone)]
pub struct CreateCardParam {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub list_id: Uuid,
    pub owner_user_id: Uuid,
}

impl TryFrom<CreateCardDto> for CreateCardParam {
    type Error = ValidationError;

    fn try_from(dto: CreateCardDto) -> Result<Self, Self::Error> {
        let dto = validation::validate(dto)?;

        Ok(Self {
            title: validation::require("titulo", dto.titulo)?,
            description: validation::require("descripcion", dto.descripcion)?,
            due_date: validation::require_date("fecha_tope", dto.fecha_tope)?,
            list_id: validation::require_uuid("listId", dto.list_id)?,
            owner_user_id: validation::require_uuid("adminUserId", dto.admin_user_id)?,
        })
    }
}

impl Validate for AssignCardUserDto {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "userId",
            rules: &[Rule::Required, Rule::Uuid],
        },
        FieldRules {
            field: "cardId",
            rules: &[Rule::Required, Rule::Uuid],
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "userId" => self.user_id.as_deref(),
            "cardId" => self.card_id.as_deref(),
            _ => None,
        }
    }
}

/// Parameters for linking a user to a card if not already linked.
#[derive(Debug, Clone, Copy)]
pub struct AssignCardUserParam {
    pub card_id: Uuid,
    pub user_id: Uuid,
    pub is_owner: bool,
}

impl TryFrom<AssignCardUserDto> for AssignCardUserParam {
    type Error = ValidationError;

    /// Assigned users join as plain members; ownership is only granted at card creation.
    fn try_from(dto: AssignCardUserDto) -> Result<Self, Self::Error> {
        let dto = validation::validate(dto)?;

        Ok(Self {
            card_id: validation::require_uuid("cardId", dto.card_id)?,
            user_id: validation::require_uuid("userId", dto.user_id)?,
            is_owner: false,
        })
    }
}
