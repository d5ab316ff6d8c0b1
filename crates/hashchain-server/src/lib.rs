//! HTTP surface for a hashchain node.
//!
//! - `GET /` returns the whole chain as JSON.
//! - `POST /` with `{"Data": <int>}` appends a block.
//! - `GET /health` is a liveness probe.

pub mod config;
pub mod routes;

pub use config::{LogFormat, ServerConfig};
pub use routes::router;
