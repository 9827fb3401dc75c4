use serde::{Deserialize, Serialize};

/// A user record. The email is stored as an opaque string; no uniqueness
/// or format constraint is enforced at this layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
}
