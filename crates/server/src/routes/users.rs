use axum::{extract::State, http::StatusCode, Json};
use models::User;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
}

/// Store a new user. The email is opaque here; nothing checks uniqueness.
pub async fn create_user(
    State(state): State<ServerState>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.store.create_user(&input.email).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
