use std::time::Duration;

use axum::{
    body::to_bytes,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::server::state::AppState;


fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), Duration::from_secs(5))
}

/// Wraps a DTO the way the JSON extractor hands it to a handler.
fn body<T>(dto: T) -> Result<Json<T>, JsonRejection> {
    Ok(Json(dto))
}

/// Splits a handler result into its status and decoded JSON body.
async fn read<T: DeserializeOwned>(response: impl IntoResponse) -> (StatusCode, T) {
    let response: Response = response.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
