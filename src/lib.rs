//! Shifts API server exposed as a library so integration tests can build
//! the app in-process.

pub mod errors;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod structs;
