//! Vidmark API library
//!
//! Exposes the modules needed to assemble the router, both for the binary in
//! `main.rs` and for integration tests that build the app against temporary
//! storage.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod setup;
pub mod state;
pub mod telemetry;
