//! JSON entry points for callers outside Rust.

pub mod json_api;

pub use json_api::{resolve_lineups_json, LineupRequest, LineupResponse, SCHEMA_VERSION};
