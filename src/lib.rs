//! Mock vector database HTTP server.
//!
//! This crate implements a stand-in for a real vector database API, used by
//! integration tests that need a `/health` + `/vectors` endpoint without the
//! cost of a real index. Responses are canned; the only state is an insert
//! counter and the process start time.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
