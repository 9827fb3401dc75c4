use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use service::BoardStore;

/// Shared state handed to every handler: the store plus the fileserver
/// hit counter backing the admin metrics page.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn BoardStore>,
    pub fileserver_hits: Arc<AtomicU64>,
}

impl ServerState {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store, fileserver_hits: Arc::new(AtomicU64::new(0)) }
    }

    pub fn record_hit(&self) {
        self.fileserver_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.fileserver_hits.load(Ordering::Relaxed)
    }

    pub fn reset_hits(&self) {
        self.fileserver_hits.store(0, Ordering::Relaxed);
    }
}
