use std::fmt;

use serde::{Deserialize, Serialize};

use super::clock::MarkerTime;
use super::fields::{marker_time, trimmed};
use super::game::GameKey;
use crate::error::{LineupError, Result};

/// Columns an event table must carry for lineup resolution.
pub const REQUIRED_EVENT_COLUMNS: &[&str] = &[
    "Season",
    "Gamecode",
    "NUMBEROFPLAY",
    "PERIOD",
    "MARKERTIME",
    "MINUTE",
    "CODETEAM",
    "PLAYTYPE",
    "PLAYER_ID",
];

// ============================================================================
// PlayType
// ============================================================================

/// `PLAYTYPE` code of a play-by-play row.
///
/// Codes the resolver does not care about are kept verbatim in `Other` so a
/// round trip through the enriched table never loses information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayType {
    /// Begin period (`BP`)
    PeriodBegin,
    /// End period (`EP`)
    PeriodEnd,
    /// End game (`EG`)
    GameEnd,
    JumpBall,
    /// Substitution, player enters (`IN`)
    SubIn,
    /// Substitution, player leaves (`OUT`)
    SubOut,
    Timeout,
    TvTimeout,
    TwoPointMade,
    TwoPointMissed,
    ThreePointMade,
    ThreePointMissed,
    FreeThrowMade,
    FreeThrowMissed,
    DefensiveRebound,
    OffensiveRebound,
    Assist,
    Turnover,
    Steal,
    /// Block in favour (`FV`)
    Block,
    /// Shot blocked against (`AG`)
    BlockAgainst,
    FoulCommitted,
    FoulReceived,
    OffensiveFoul,
    UnsportsmanlikeFoul,
    TechnicalFoul,
    DisqualifyingFoul,
    Other(String),
}

impl PlayType {
    pub fn code(&self) -> &str {
        match self {
            PlayType::PeriodBegin => "BP",
            PlayType::PeriodEnd => "EP",
            PlayType::GameEnd => "EG",
            PlayType::JumpBall => "JB",
            PlayType::SubIn => "IN",
            PlayType::SubOut => "OUT",
            PlayType::Timeout => "TOUT",
            PlayType::TvTimeout => "TOUT_TV",
            PlayType::TwoPointMade => "2FGM",
            PlayType::TwoPointMissed => "2FGA",
            PlayType::ThreePointMade => "3FGM",
            PlayType::ThreePointMissed => "3FGA",
            PlayType::FreeThrowMade => "FTM",
            PlayType::FreeThrowMissed => "FTA",
            PlayType::DefensiveRebound => "D",
            PlayType::OffensiveRebound => "O",
            PlayType::Assist => "AS",
            PlayType::Turnover => "TO",
            PlayType::Steal => "ST",
            PlayType::Block => "FV",
            PlayType::BlockAgainst => "AG",
            PlayType::FoulCommitted => "CM",
            PlayType::FoulReceived => "RV",
            PlayType::OffensiveFoul => "OF",
            PlayType::UnsportsmanlikeFoul => "CMU",
            PlayType::TechnicalFoul => "CMT",
            PlayType::DisqualifyingFoul => "CMD",
            PlayType::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "BP" => PlayType::PeriodBegin,
            "EP" => PlayType::PeriodEnd,
            "EG" => PlayType::GameEnd,
            "JB" => PlayType::JumpBall,
            "IN" => PlayType::SubIn,
            "OUT" => PlayType::SubOut,
            "TOUT" => PlayType::Timeout,
            "TOUT_TV" => PlayType::TvTimeout,
            "2FGM" => PlayType::TwoPointMade,
            "2FGA" => PlayType::TwoPointMissed,
            "3FGM" => PlayType::ThreePointMade,
            "3FGA" => PlayType::ThreePointMissed,
            "FTM" => PlayType::FreeThrowMade,
            "FTA" => PlayType::FreeThrowMissed,
            "D" => PlayType::DefensiveRebound,
            "O" => PlayType::OffensiveRebound,
            "AS" => PlayType::Assist,
            "TO" => PlayType::Turnover,
            "ST" => PlayType::Steal,
            "FV" => PlayType::Block,
            "AG" => PlayType::BlockAgainst,
            "CM" => PlayType::FoulCommitted,
            "RV" => PlayType::FoulReceived,
            "OF" => PlayType::OffensiveFoul,
            "CMU" => PlayType::UnsportsmanlikeFoul,
            "CMT" => PlayType::TechnicalFoul,
            "CMD" => PlayType::DisqualifyingFoul,
            other => PlayType::Other(other.to_string()),
        }
    }

    #[inline]
    pub fn is_substitution(&self) -> bool {
        matches!(self, PlayType::SubIn | PlayType::SubOut)
    }

    /// The sub type a pairing partner must have.
    pub fn counterpart(&self) -> Option<PlayType> {
        match self {
            PlayType::SubIn => Some(PlayType::SubOut),
            PlayType::SubOut => Some(PlayType::SubIn),
            _ => None,
        }
    }
}

impl From<String> for PlayType {
    fn from(value: String) -> Self {
        PlayType::from_code(&value)
    }
}

impl From<PlayType> for String {
    fn from(value: PlayType) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// PbpEvent
// ============================================================================

/// One play-by-play row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PbpEvent {
    #[serde(rename = "Season")]
    pub season: u32,
    #[serde(rename = "Gamecode")]
    pub gamecode: u32,
    /// Source order index. Not a reliable chronological key.
    #[serde(rename = "NUMBEROFPLAY")]
    pub ordinal: u32,
    #[serde(rename = "PERIOD")]
    pub period: u8,
    /// `null` or blank on period-boundary rows
    #[serde(rename = "MARKERTIME", deserialize_with = "marker_time")]
    pub marker_time: MarkerTime,
    #[serde(rename = "MINUTE")]
    pub minute: u8,
    #[serde(rename = "CODETEAM", deserialize_with = "trimmed")]
    pub team: Option<String>,
    #[serde(rename = "PLAYTYPE")]
    pub play_type: PlayType,
    #[serde(rename = "PLAYER_ID", deserialize_with = "trimmed")]
    pub player_id: Option<String>,
    /// Display name, informational only
    #[serde(rename = "PLAYER", default, deserialize_with = "trimmed")]
    pub player: Option<String>,
    #[serde(rename = "PLAYINFO", default, deserialize_with = "trimmed")]
    pub play_info: Option<String>,
}

impl PbpEvent {
    pub fn game_key(&self) -> GameKey {
        GameKey::new(self.season, self.gamecode)
    }

    /// (period, minute, marker) triple used to sanity-check pairings.
    pub fn clock(&self) -> (u8, u8, MarkerTime) {
        (self.period, self.minute, self.marker_time)
    }

    pub fn team_code(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub fn player_code(&self) -> Option<&str> {
        self.player_id.as_deref()
    }
}

// ============================================================================
// EventTable
// ============================================================================

/// Play-by-play rows of a single game, in source order.
///
/// The table is treated as an immutable arena: the resolver addresses rows
/// by position and never reorders or edits them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTable {
    rows: Vec<PbpEvent>,
}

impl EventTable {
    pub fn new(rows: Vec<PbpEvent>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PbpEvent] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<PbpEvent> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The single game this table belongs to.
    ///
    /// Fails on an empty table or when rows from more than one game are
    /// mixed together.
    pub fn game_key(&self) -> Result<GameKey> {
        let first = self
            .rows
            .first()
            .map(PbpEvent::game_key)
            .ok_or(LineupError::EmptyEventTable)?;

        match self.rows.iter().map(PbpEvent::game_key).find(|k| *k != first) {
            Some(second) => Err(LineupError::MixedGames { first, second }),
            None => Ok(first),
        }
    }

    /// Number of substitution rows (`IN` + `OUT`).
    pub fn substitution_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|e| e.play_type.is_substitution())
            .count()
    }
}

impl From<Vec<PbpEvent>> for EventTable {
    fn from(rows: Vec<PbpEvent>) -> Self {
        Self::new(rows)
    }
}
