use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use service::{BoardStore, JsonDb};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_paths() -> (String, String) {
    match configs::load_default() {
        Ok(cfg) => (cfg.server.assets_dir, cfg.database.path),
        Err(_) => (
            "frontend".to_string(),
            env::var("DATABASE_PATH").unwrap_or_else(|_| "data/database.json".to_string()),
        ),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let (assets_dir, database_path) = load_paths();
    common::env::ensure_env(&assets_dir, &database_path).await?;

    // An unreadable or malformed database file must abort startup; the
    // persistence invariants cannot be guaranteed over a bad document.
    let db = JsonDb::open(&database_path).await?;
    info!(path = %database_path, "database ready");

    let store: Arc<dyn BoardStore> = db;
    let state = ServerState::new(store);

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors, &assets_dir);

    let addr = load_bind_addr()?;
    info!(%addr, "starting chirpy server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
