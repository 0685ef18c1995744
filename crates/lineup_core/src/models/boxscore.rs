use serde::{Deserialize, Serialize};

use super::fields::{flag, trimmed, trimmed_required};
use super::game::GameKey;
use crate::error::{LineupError, Result};

/// Columns a boxscore table must carry to seed the starting fives.
pub const REQUIRED_BOXSCORE_COLUMNS: &[&str] =
    &["Season", "Gamecode", "Team", "Home", "Player_ID", "IsStarter"];

/// Per-player boxscore row. Only the fields needed to seed lineups are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxscoreEntry {
    #[serde(rename = "Season")]
    pub season: u32,
    #[serde(rename = "Gamecode")]
    pub gamecode: u32,
    #[serde(rename = "Team", deserialize_with = "trimmed_required")]
    pub team: String,
    #[serde(rename = "Home", deserialize_with = "flag")]
    pub is_home: bool,
    /// `None` on the team/total summary rows the feed appends
    #[serde(rename = "Player_ID", deserialize_with = "trimmed")]
    pub player_id: Option<String>,
    #[serde(rename = "Player", default, deserialize_with = "trimmed")]
    pub player: Option<String>,
    #[serde(rename = "IsStarter", deserialize_with = "flag")]
    pub is_starter: bool,
}

impl BoxscoreEntry {
    pub fn game_key(&self) -> GameKey {
        GameKey::new(self.season, self.gamecode)
    }
}

/// Boxscore rows of a single game, home team first by convention.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxscoreTable {
    rows: Vec<BoxscoreEntry>,
}

impl BoxscoreTable {
    pub fn new(rows: Vec<BoxscoreEntry>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BoxscoreEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The single game this boxscore belongs to, `None` when empty.
    pub fn game_key(&self) -> Result<Option<GameKey>> {
        let Some(first) = self.rows.first().map(BoxscoreEntry::game_key) else {
            return Ok(None);
        };

        match self
            .rows
            .iter()
            .map(BoxscoreEntry::game_key)
            .find(|k| *k != first)
        {
            Some(second) => Err(LineupError::MixedGames { first, second }),
            None => Ok(Some(first)),
        }
    }

    pub fn starters(&self) -> impl Iterator<Item = &BoxscoreEntry> {
        self.rows.iter().filter(|r| r.is_starter)
    }
}

impl From<Vec<BoxscoreEntry>> for BoxscoreTable {
    fn from(rows: Vec<BoxscoreEntry>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_feed_json() {
        let json = r#"{
            "Season": 2023, "Gamecode": 302, "Team": "MAD", "Home": 1,
            "Player_ID": " P001 ", "Player": "DOE, JOHN", "IsStarter": 1
        }"#;
        let row: BoxscoreEntry = serde_json::from_str(json).unwrap();
        assert!(row.is_home);
        assert!(row.is_starter);
        assert_eq!(row.player_id.as_deref(), Some("P001"));
    }

    #[test]
    fn test_team_total_row_has_no_player() {
        let json = r#"{
            "Season": 2023, "Gamecode": 302, "Team": "MAD", "Home": 1,
            "Player_ID": "", "Player": "Team", "IsStarter": 0
        }"#;
        let row: BoxscoreEntry = serde_json::from_str(json).unwrap();
        assert_eq!(row.player_id, None);
        assert!(!row.is_starter);
    }

    #[test]
    fn test_blank_team_rejected() {
        let json = r#"{
            "Season": 2023, "Gamecode": 302, "Team": "  ", "Home": 1,
            "Player_ID": "P1", "IsStarter": 1
        }"#;
        assert!(serde_json::from_str::<BoxscoreEntry>(json).is_err());
    }
}
