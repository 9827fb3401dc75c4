use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::Chirp;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateChirp {
    pub body: String,
}

/// Validate and store a new chirp.
pub async fn create_chirp(
    State(state): State<ServerState>,
    Json(input): Json<CreateChirp>,
) -> Result<(StatusCode, Json<Chirp>), ApiError> {
    let chirp = state.store.create_chirp(&input.body).await?;
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// All chirps in ascending id order.
pub async fn list_chirps(State(state): State<ServerState>) -> Json<Vec<Chirp>> {
    Json(state.store.chirps().await)
}

/// A single chirp, or 404.
pub async fn get_chirp(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Result<Json<Chirp>, ApiError> {
    let chirp = state.store.chirp(id).await?;
    Ok(Json(chirp))
}
