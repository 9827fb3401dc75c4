use std::{path::PathBuf, sync::Arc};

use tokio::{fs, sync::RwLock};
use tracing::debug;

use models::{Chirp, Document, User};

use crate::errors::ServiceError;
use crate::store::BoardStore;
use crate::validator;

/// Flat-file JSON database holding the whole chirp board in one document.
///
/// Every mutation rewrites the entire document: serialize, write to a
/// sibling tmp file, rename over the real file. The write lock is held
/// across the flush, so readers only ever observe complete snapshots and
/// mutations are serialized. O(total records) per write, fine at this size.
#[derive(Debug)]
pub struct JsonDb {
    inner: RwLock<Document>,
    file_path: PathBuf,
}

impl JsonDb {
    /// Open the database at `path`. Creates the file with an empty document
    /// if missing; fails on an unreadable or malformed existing file rather
    /// than silently starting over.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Io(e.to_string()))?;
        }

        let doc = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice::<Document>(&bytes)
                .map_err(|e| ServiceError::Corrupt(format!("{}: {}", file_path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Document::default();
                write_document(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::Io(e.to_string())),
        };

        debug!(path = %file_path.display(), chirps = doc.chirps.len(), users = doc.users.len(), "database opened");
        Ok(Arc::new(Self { inner: RwLock::new(doc), file_path }))
    }

    /// Path of the backing file, mainly for diagnostics.
    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }
}

#[async_trait::async_trait]
impl BoardStore for JsonDb {
    async fn create_chirp(&self, body: &str) -> Result<Chirp, ServiceError> {
        // reject before touching any state; invalid chirps are never persisted
        let cleaned = validator::clean_body(body)?;

        let mut doc = self.inner.write().await;
        let chirp = Chirp { id: doc.next_chirp_id(), body: cleaned };
        doc.chirps.insert(chirp.id, chirp.clone());
        write_document(&self.file_path, &doc).await?;
        Ok(chirp)
    }

    async fn chirps(&self) -> Vec<Chirp> {
        self.inner.read().await.chirps_ordered()
    }

    async fn chirp(&self, id: u64) -> Result<Chirp, ServiceError> {
        self.inner
            .read()
            .await
            .chirps
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("chirp", id))
    }

    async fn create_user(&self, email: &str) -> Result<User, ServiceError> {
        let mut doc = self.inner.write().await;
        let user = User { id: doc.next_user_id(), email: email.to_string() };
        doc.users.insert(user.id, user.clone());
        write_document(&self.file_path, &doc).await?;
        Ok(user)
    }

    async fn users(&self) -> Vec<User> {
        self.inner.read().await.users_ordered()
    }

    async fn reset(&self) -> Result<(), ServiceError> {
        let mut doc = self.inner.write().await;
        doc.chirps.clear();
        doc.users.clear();
        write_document(&self.file_path, &doc).await
    }
}

/// Replace the file contents atomically: write a sibling tmp file, then
/// rename it over the target. Callers mutate under the write lock, so the
/// tmp name cannot collide.
async fn write_document(path: &std::path::Path, doc: &Document) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(doc).map_err(|e| ServiceError::Io(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data)
        .await
        .map_err(|e| ServiceError::Io(e.to_string()))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| ServiceError::Io(e.to_string()))?;
    Ok(())
}
