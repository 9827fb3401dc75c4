//! HTTP layer of the chirp board: routes, handlers, and startup wiring.

pub mod errors;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
