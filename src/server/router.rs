use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{board, card, list, user},
    state::AppState,
};

pub static OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskboard API"),
    tags(
        (name = "board", description = "Boards and their admin membership"),
        (name = "list", description = "Lists within a board"),
        (name = "card", description = "Cards and card membership"),
        (name = "user", description = "Users")
    )
)]
struct ApiDoc;

/// Builds every API route and collects their OpenAPI documentation.
///
/// The generated document is served as JSON at [`OPENAPI_PATH`].
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(board::get_boards, board::create_board))
        .routes(routes!(list::get_lists_by_board))
        .routes(routes!(list::create_list))
        .routes(routes!(card::get_cards_by_list))
        .routes(routes!(card::create_card))
        .routes(routes!(card::assign_card_user))
        .routes(routes!(user::get_users, user::create_user))
        .split_for_parts();

    router.route(OPENAPI_PATH, get(move || async move { Json(api) }))
}

/// Full application with shared state, request tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
