use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        card::{AssignCardUserDto, CardDto, CardMemberDto, CardWithOwnerDto, CreateCardDto},
    },
    server::{
        error::AppError,
        model::card::{AssignCardUserParam, CreateCardParam},
        service::card::CardService,
        state::AppState,
    },
};

pub static CARD_TAG: &str = "card";

#[utoipa::path(
    post,
    path = "/card",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Card and owner membership created", body = CardDto),
        (status = 422, description = "Invalid card data, unknown list or unknown owner", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CreateCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateCardParam::try_from(payload)?;

    let card = CardService::new(&state.db, state.store_timeout)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// POST /carduser - Assign a user to a card
///
/// Responds 201 whether the link was created now or already existed; only the number of
/// persisted rows tells the two apart.
#[utoipa::path(
    post,
    path = "/carduser",
    tag = CARD_TAG,
    request_body = AssignCardUserDto,
    responses(
        (status = 201, description = "User is assigned to the card", body = CardMemberDto),
        (status = 422, description = "Invalid IDs, unknown card or unknown user", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_card_user(
    State(state): State<AppState>,
    payload: Result<Json<AssignCardUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = AssignCardUserParam::try_from(payload)?;

    let assignment = CardService::new(&state.db, state.store_timeout)
        .assign_user(param)
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.member.into_dto())))
}

#[utoipa::path(
    get,
    path = "/list/{list_id}/card",
    tag = CARD_TAG,
    params(
        ("list_id" = Uuid, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "Cards of the list with owner names", body = Vec<CardWithOwnerDto>),
        (status = 400, description = "Invalid list ID or failed read", body = ErrorDto)
    ),
)]
pub async fn get_cards_by_list(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let cards = CardService::new(&state.db, state.store_timeout)
        .get_by_list(list_id)
        .await?;

    let dto: Vec<CardWithOwnerDto> = cards.into_iter().map(|card| card.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
