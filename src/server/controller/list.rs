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
        list::{CreateListDto, ListDto},
    },
    server::{
        error::AppError, model::list::CreateListParam, service::list::ListService,
        state::AppState,
    },
};

pub static LIST_TAG: &str = "list";

#[utoipa::path(
    post,
    path = "/list",
    tag = LIST_TAG,
    request_body = CreateListDto,
    responses(
        (status = 201, description = "List created", body = ListDto),
        (status = 422, description = "Invalid list data or unknown board", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    payload: Result<Json<CreateListDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateListParam::try_from(payload)?;

    let list = ListService::new(&state.db, state.store_timeout)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(list.into_dto())))
}

#[utoipa::path(
    get,
    path = "/boards/{board_id}/list",
    tag = LIST_TAG,
    params(
        ("board_id" = Uuid, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Lists of the board", body = Vec<ListDto>),
        (status = 400, description = "Invalid board ID or failed read", body = ErrorDto)
    ),
)]
pub async fn get_lists_by_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lists = ListService::new(&state.db, state.store_timeout)
        .get_by_board(board_id)
        .await?;

    let dto: Vec<ListDto> = lists.into_iter().map(|list| list.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
