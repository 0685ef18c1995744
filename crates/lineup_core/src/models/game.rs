//! Game identity and team sides.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Season + game code pair identifying one game in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameKey {
    /// Start year of the season
    pub season: u32,
    pub gamecode: u32,
}

impl GameKey {
    pub const fn new(season: u32, gamecode: u32) -> Self {
        Self { season, gamecode }
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.season, self.gamecode)
    }
}

// ============================================================================
// TeamSide
// ============================================================================

/// Which side of the game an event's team code belongs to.
///
/// `Unknown` covers events without a team (period markers, jump balls in
/// some feeds) and codes that match neither boxscore team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
    #[default]
    Unknown,
}

impl TeamSide {
    /// Nullable home flag as written to the enriched table.
    #[inline]
    pub const fn home_flag(self) -> Option<bool> {
        match self {
            TeamSide::Home => Some(true),
            TeamSide::Away => Some(false),
            TeamSide::Unknown => None,
        }
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, TeamSide::Unknown)
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
            TeamSide::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Home and away team codes, read once from the boxscore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTeams {
    pub home: String,
    pub away: String,
}

impl GameTeams {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// Resolve an event's team code to a side.
    pub fn side_of(&self, code: Option<&str>) -> TeamSide {
        match code {
            Some(c) if c == self.home => TeamSide::Home,
            Some(c) if c == self.away => TeamSide::Away,
            _ => TeamSide::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_of() {
        let teams = GameTeams::new("MAD", "BAR");
        assert_eq!(teams.side_of(Some("MAD")), TeamSide::Home);
        assert_eq!(teams.side_of(Some("BAR")), TeamSide::Away);
        assert_eq!(teams.side_of(Some("OLY")), TeamSide::Unknown);
        assert_eq!(teams.side_of(None), TeamSide::Unknown);
    }

    #[test]
    fn test_home_flag() {
        assert_eq!(TeamSide::Home.home_flag(), Some(true));
        assert_eq!(TeamSide::Away.home_flag(), Some(false));
        assert_eq!(TeamSide::Unknown.home_flag(), None);
        assert!(!TeamSide::Unknown.is_known());
    }

    #[test]
    fn test_game_key_display_and_order() {
        let a = GameKey::new(2022, 5);
        let b = GameKey::new(2023, 1);
        assert_eq!(a.to_string(), "2022/5");
        assert!(a < b);
    }
}
