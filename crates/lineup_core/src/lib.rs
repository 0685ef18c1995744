//! # lineup_core - Basketball Lineup Reconstruction
//!
//! Rebuilds the five players each team has on the floor at every
//! play-by-play event of a game.
//!
//! ## Features
//! - Starting fives from the boxscore starter flags
//! - Forward-scan IN/OUT pairing, tolerant of either order
//! - Per-row validity flag for the acting player
//! - Anomaly report instead of hard failures for feed glitches
//! - Batch resolution on the rayon pool and a JSON API

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod lineups;
pub mod models;
pub mod source;

pub use api::{resolve_lineups_json, LineupRequest, LineupResponse, SCHEMA_VERSION};
pub use batch::{resolve_games, resolve_games_from_source, BatchSummary, GameInput, GameOutcome};
pub use config::{PairingScope, ResolverConfig};
pub use error::{LineupError, Result};
pub use lineups::{
    lineup_changes, resolve_lineups, resolve_lineups_with_config, validate_lineups,
    AnomalyKind, LineupAnomaly, LineupChange, LineupReport, StartingLineups,
};
pub use models::{
    BoxscoreEntry, BoxscoreTable, EnrichedEvent, EnrichedEventTable, EventTable, GameKey,
    GameTeams, Lineup, MarkerTime, PbpEvent, PlayType, TeamSide,
};
pub use source::{resolve_game, CsvDirSource, DataSource, InMemorySource};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
