use models::{Chirp, User};

use crate::errors::ServiceError;

/// Storage seam consumed by the HTTP layer.
///
/// Implementations own all durable state; callers never touch the backing
/// file directly. Errors carry enough structure for the caller to map them
/// to responses (validation vs. not-found vs. storage failure).
#[async_trait::async_trait]
pub trait BoardStore: Send + Sync {
    /// Validate and persist a new chirp, assigning the next id.
    async fn create_chirp(&self, body: &str) -> Result<Chirp, ServiceError>;

    /// All chirps in ascending id order. Empty when none exist.
    async fn chirps(&self) -> Vec<Chirp>;

    /// A single chirp by id.
    async fn chirp(&self, id: u64) -> Result<Chirp, ServiceError>;

    /// Persist a new user, assigning the next id from the user sequence.
    async fn create_user(&self, email: &str) -> Result<User, ServiceError>;

    /// All users in ascending id order.
    async fn users(&self) -> Vec<User>;

    /// Clear both collections and persist the empty document.
    async fn reset(&self) -> Result<(), ServiceError>;
}
