use serde::{Deserialize, Serialize};

/// A short text post. Immutable once stored; the body has already passed
/// validation and word substitution by the time it is persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chirp {
    pub id: u64,
    pub body: String,
}
