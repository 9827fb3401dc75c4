use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Chirp, User};

/// The whole database: two id-keyed collections serialized as one JSON
/// object. serde_json writes the integer keys as decimal strings, so the
/// file shape is `{"chirps": {"1": {...}}, "users": {"1": {...}}}`.
///
/// Next ids are not stored; they derive from the maximum key present in
/// each collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub chirps: HashMap<u64, Chirp>,
    #[serde(default)]
    pub users: HashMap<u64, User>,
}

impl Document {
    /// Id the next created chirp receives: max existing id + 1, or 1.
    pub fn next_chirp_id(&self) -> u64 {
        next_id(&self.chirps)
    }

    /// Id the next created user receives; independent of the chirp sequence.
    pub fn next_user_id(&self) -> u64 {
        next_id(&self.users)
    }

    /// All chirps sorted by ascending id.
    pub fn chirps_ordered(&self) -> Vec<Chirp> {
        let mut chirps: Vec<Chirp> = self.chirps.values().cloned().collect();
        chirps.sort_by_key(|c| c.id);
        chirps
    }

    /// All users sorted by ascending id.
    pub fn users_ordered(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }
}

fn next_id<V>(map: &HashMap<u64, V>) -> u64 {
    map.keys().max().copied().unwrap_or(0) + 1
}
