//! Starting Lineup Extractor
//!
//! 박스스코어에서 홈/원정 선발 5인을 추출한다.
//! 소스 순서를 유지하므로 같은 입력은 항상 같은 슬롯 순서를 낸다.

use tracing::debug;

use crate::error::{LineupError, Result};
use crate::models::{BoxscoreTable, GameTeams, Lineup, LINEUP_SIZE};

/// Starting fives plus the team codes they were read under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingLineups {
    pub teams: GameTeams,
    pub home: Lineup,
    pub away: Lineup,
}

/// Read the home/away team codes from the boxscore's home flag.
pub fn extract_teams(boxscore: &BoxscoreTable) -> Result<GameTeams> {
    let mut home: Option<&str> = None;
    let mut away: Option<&str> = None;

    for row in boxscore.rows() {
        let (slot, side) = if row.is_home {
            (&mut home, "home")
        } else {
            (&mut away, "away")
        };
        match *slot {
            None => *slot = Some(row.team.as_str()),
            Some(existing) if existing != row.team => {
                return Err(LineupError::AmbiguousTeam {
                    side,
                    first: existing.to_string(),
                    second: row.team.clone(),
                });
            }
            Some(_) => {}
        }
    }

    let home = home.ok_or(LineupError::MissingTeam { side: "home" })?;
    let away = away.ok_or(LineupError::MissingTeam { side: "away" })?;
    if home == away {
        return Err(LineupError::AmbiguousTeam {
            side: "away",
            first: home.to_string(),
            second: away.to_string(),
        });
    }

    Ok(GameTeams::new(home, away))
}

/// Collect one team's starters in source-listed order.
fn team_starters(boxscore: &BoxscoreTable, team: &str) -> Result<Lineup> {
    let mut ids: Vec<&str> = Vec::with_capacity(LINEUP_SIZE);

    for row in boxscore.starters().filter(|r| r.team == team) {
        let id = row
            .player_id
            .as_deref()
            .ok_or_else(|| LineupError::AnonymousStarter {
                team: team.to_string(),
            })?;
        if ids.contains(&id) {
            return Err(LineupError::DuplicateStarter {
                team: team.to_string(),
                player: id.to_string(),
            });
        }
        ids.push(id);
    }

    let found = ids.len();
    Lineup::from_ids(ids).ok_or_else(|| LineupError::InvalidStarterCount {
        team: team.to_string(),
        found,
    })
}

/// Derive both starting fives from a single game's boxscore.
///
/// Fails when either team does not list exactly five distinct starters;
/// that means the data source returned an incomplete game.
pub fn extract_starting_lineups(boxscore: &BoxscoreTable) -> Result<StartingLineups> {
    boxscore.game_key()?;
    let teams = extract_teams(boxscore)?;
    let home = team_starters(boxscore, &teams.home)?;
    let away = team_starters(boxscore, &teams.away)?;

    debug!(
        home_team = %teams.home,
        away_team = %teams.away,
        "starting lineups: home {} / away {}",
        home,
        away
    );

    Ok(StartingLineups { teams, home, away })
}
