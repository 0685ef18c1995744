use thiserror::Error;

use crate::models::GameKey;

/// Structural failures that abort a single game's resolution.
///
/// Per-event problems (unmatched substitutions, players missing from the
/// computed five) are never raised; they are recorded in
/// [`crate::lineups::LineupReport`] instead.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event table is empty")]
    EmptyEventTable,

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid value in column {column}: {value:?}")]
    InvalidValue { column: String, value: String },

    #[error("Expected a single game, found {first} and {second}")]
    MixedGames { first: GameKey, second: GameKey },

    #[error("Boxscore game {boxscore} does not match event game {events}")]
    GameMismatch { events: GameKey, boxscore: GameKey },

    #[error("Boxscore has no {side} team")]
    MissingTeam { side: &'static str },

    #[error("Boxscore lists more than one {side} team: {first}, {second}")]
    AmbiguousTeam {
        side: &'static str,
        first: String,
        second: String,
    },

    #[error("Team {team} has {found} starters, expected 5")]
    InvalidStarterCount { team: String, found: usize },

    #[error("Team {team} lists starter {player} more than once")]
    DuplicateStarter { team: String, player: String },

    #[error("Team {team} has a starter row without a player id")]
    AnonymousStarter { team: String },

    #[error("Game {0} not found in data source")]
    GameNotFound(GameKey),
}

impl LineupError {
    /// Whether a batch caller can reasonably retry this game.
    ///
    /// Input-shape errors will fail the same way on every attempt; only I/O
    /// and lookups against a source that may still be filling up are worth
    /// retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LineupError::Io(_) => true,
            LineupError::GameNotFound(_) => true,
            LineupError::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LineupError::InvalidStarterCount {
            team: "MAD".to_string(),
            found: 4,
        };
        assert_eq!(err.to_string(), "Team MAD has 4 starters, expected 5");

        let err = LineupError::MixedGames {
            first: GameKey::new(2023, 1),
            second: GameKey::new(2023, 2),
        };
        assert_eq!(
            err.to_string(),
            "Expected a single game, found 2023/1 and 2023/2"
        );
    }

    #[test]
    fn test_is_recoverable() {
        let io = LineupError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(io.is_recoverable());
        assert!(LineupError::GameNotFound(GameKey::new(2022, 10)).is_recoverable());
        assert!(!LineupError::EmptyEventTable.is_recoverable());
        assert!(!LineupError::MissingTeam { side: "home" }.is_recoverable());
    }
}
