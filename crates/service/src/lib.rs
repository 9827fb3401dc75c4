//! Core of the chirp board: validation and flat-file persistence.
//! - Separates business rules from the HTTP layer.
//! - Reuses entity definitions from the `models` crate.
//! - Provides clear error types and a trait seam for the server.

pub mod errors;
pub mod storage;
pub mod store;
pub mod validator;

pub use errors::ServiceError;
pub use storage::json_db::JsonDb;
pub use store::BoardStore;
