//! Environment/runtime helpers
//!
//! Startup sanity checks for the directories the service relies on.

use std::path::Path;

use tracing::warn;

/// Ensure the database file's directory exists and warn when the static
/// asset directory served under `/app` is missing.
pub async fn ensure_env(assets_dir: &str, database_path: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(assets_dir).await.is_err() {
        warn!(%assets_dir, "asset directory not found; /app requests may 404");
    }
    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
