use serde::{Deserialize, Serialize};

use super::events::PbpEvent;
use super::game::{GameKey, GameTeams};
use super::lineup::Lineup;
use crate::lineups::LineupReport;

/// A play-by-play row with the on-court fives attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEvent {
    #[serde(flatten)]
    pub event: PbpEvent,
    #[serde(rename = "LINEUP_HOME")]
    pub home_lineup: Lineup,
    #[serde(rename = "LINEUP_AWAY")]
    pub away_lineup: Lineup,
    /// `None` when the row's team code matches neither team
    #[serde(rename = "IS_HOME_TEAM")]
    pub is_home_team: Option<bool>,
    /// Present only when the validity pass ran
    #[serde(
        rename = "VALID_LINEUP",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub valid_lineup: Option<bool>,
}

impl EnrichedEvent {
    /// Whether `player_id` is in either five at this row.
    pub fn on_court(&self, player_id: &str) -> bool {
        self.home_lineup.contains(player_id) || self.away_lineup.contains(player_id)
    }
}

/// Output of a single game's resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEventTable {
    pub game: GameKey,
    pub teams: GameTeams,
    pub rows: Vec<EnrichedEvent>,
    pub report: LineupReport,
}

impl EnrichedEventTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[EnrichedEvent] {
        &self.rows
    }

    /// Whether the validity column has been populated.
    pub fn is_validated(&self) -> bool {
        self.rows.iter().all(|r| r.valid_lineup.is_some())
    }
}
