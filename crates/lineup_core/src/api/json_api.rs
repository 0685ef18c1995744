use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{PairingScope, ResolverConfig};
use crate::lineups::{lineup_changes, resolve_lineups_with_config, LineupChange, LineupReport};
use crate::models::{BoxscoreTable, EnrichedEvent, EventTable, GameKey, GameTeams};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    pub events: EventTable,
    pub boxscore: BoxscoreTable,
    #[serde(default)]
    pub validate: Option<bool>,
    #[serde(default)]
    pub pairing: Option<PairingScope>,
    #[serde(default)]
    pub check_clock: Option<bool>,
    /// Also return the lineup change log
    #[serde(default)]
    pub include_changes: bool,
}

impl LineupRequest {
    fn config(&self) -> ResolverConfig {
        let defaults = ResolverConfig::default();
        ResolverConfig {
            validate: self.validate.unwrap_or(defaults.validate),
            pairing: self.pairing.unwrap_or(defaults.pairing),
            check_clock: self.check_clock.unwrap_or(defaults.check_clock),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LineupResponse {
    pub schema_version: u8,
    pub game: GameKey,
    pub teams: GameTeams,
    pub rows: Vec<EnrichedEvent>,
    pub report: LineupReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<LineupChange>>,
}

/// Resolve one game from a JSON request.
///
/// Request: `{ "schema_version": 1, "events": [...], "boxscore": [...],
/// "validate"?: bool, "pairing"?: "any_team" | "same_team",
/// "check_clock"?: bool, "include_changes"?: bool }`. Row objects use the
/// feed's column names.
pub fn resolve_lineups_json(request_json: &str) -> Result<String, String> {
    let request: LineupRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let config = request.config();
    let table = resolve_lineups_with_config(&request.events, &request.boxscore, &config)
        .map_err(|e| {
            warn!("lineup request rejected: {}", e);
            format!("Lineup resolution failed: {}", e)
        })?;

    let changes = request.include_changes.then(|| lineup_changes(&table));
    let response = LineupResponse {
        schema_version: SCHEMA_VERSION,
        game: table.game,
        teams: table.teams,
        rows: table.rows,
        report: table.report,
        changes,
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
