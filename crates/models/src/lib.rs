//! Plain data model for the chirp board.
//! - Entity structs shared by the service and server crates.
//! - `Document` is the whole database value, in memory and on disk.

pub mod chirp;
pub mod document;
pub mod user;

pub use chirp::Chirp;
pub use document::Document;
pub use user::User;
