use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Html, Response},
};

use crate::errors::ApiError;
use crate::state::ServerState;

/// Middleware counting every request that reaches the `/app` front end.
pub async fn track_fileserver_hit(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Response {
    state.record_hit();
    next.run(request).await
}

/// Admin landing page showing the fileserver hit count.
pub async fn metrics(State(state): State<ServerState>) -> Html<String> {
    let hits = state.hits();
    Html(format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {hits} times!</p></body></html>"
    ))
}

/// Zero the hit counter and wipe the database.
pub async fn reset(State(state): State<ServerState>) -> Result<String, ApiError> {
    state.reset_hits();
    state.store.reset().await?;
    Ok("Hits reset to 0".to_string())
}
