use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        board::{BoardDto, CreateBoardDto},
    },
    server::{
        error::AppError, model::board::CreateBoardParam, service::board::BoardService,
        state::AppState,
    },
};

pub static BOARD_TAG: &str = "board";

#[utoipa::path(
    post,
    path = "/boards",
    tag = BOARD_TAG,
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Board and admin membership created", body = BoardDto),
        (status = 422, description = "Invalid board data or write rejected", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    payload: Result<Json<CreateBoardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateBoardParam::try_from(payload)?;

    let board = BoardService::new(&state.db, state.store_timeout)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

#[utoipa::path(
    get,
    path = "/boards",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "Boards with their admins", body = Vec<BoardDto>),
        (status = 400, description = "Failed to read boards", body = ErrorDto)
    ),
)]
pub async fn get_boards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let boards = BoardService::new(&state.db, state.store_timeout)
        .get_all()
        .await?;

    let dto: Vec<BoardDto> = boards.into_iter().map(|board| board.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
