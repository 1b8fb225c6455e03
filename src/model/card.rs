use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardDto {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    #[serde(rename = "fecha_tope")]
    pub fecha_tope: Option<String>, // "YYYY-MM-DD" or RFC 3339
    pub list_id: Option<String>,
    pub admin_user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: Uuid,
    pub titulo: String,
    pub descripcion: String,
    #[serde(rename = "fecha_tope")]
    pub fecha_tope: NaiveDate,
    pub list_id: Uuid,
    pub owner_user_id: Uuid,
}

/// Card listing row, one per owner of the card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardWithOwnerDto {
    pub id: Uuid,
    pub titulo: String,
    pub descripcion: String,
    #[serde(rename = "fecha_tope")]
    pub fecha_tope: NaiveDate,
    pub list_id: Uuid,
    pub owner_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignCardUserDto {
    pub user_id: Option<String>,
    pub card_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardMemberDto {
    pub card_id: Uuid,
    pub user_id: Uuid,
    pub is_owner: bool,
}
