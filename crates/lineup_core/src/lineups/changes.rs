//! Lineup change log: one row per moment either five changes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{EnrichedEventTable, Lineup, MarkerTime};

/// Period length on the feed's countdown clock (10:00).
pub const PERIOD_START_MARKER: MarkerTime = MarkerTime::from_seconds(600);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupChange {
    #[serde(rename = "Season")]
    pub season: u32,
    #[serde(rename = "Gamecode")]
    pub gamecode: u32,
    #[serde(rename = "PERIOD")]
    pub period: u8,
    #[serde(rename = "MARKERTIME")]
    pub marker_time: MarkerTime,
    #[serde(rename = "MINUTE")]
    pub minute: u8,
    #[serde(rename = "LINEUP_HOME")]
    pub home_lineup: Lineup,
    #[serde(rename = "LINEUP_AWAY")]
    pub away_lineup: Lineup,
}

impl LineupChange {
    fn clock_key(&self) -> (u8, u8, MarkerTime) {
        (self.period, self.minute, self.marker_time)
    }
}

/// Collapse an enriched table into the moments the fives change.
///
/// The first entry is the lineups at the first row, stamped P1 10:00
/// (row 0 is the period-begin marker in the feed). When both
/// teams change at the same clock only the last state at that clock is kept.
pub fn lineup_changes(table: &EnrichedEventTable) -> Vec<LineupChange> {
    let Some(first) = table.rows.first() else {
        return Vec::new();
    };

    let mut changes = vec![LineupChange {
        season: table.game.season,
        gamecode: table.game.gamecode,
        period: 1,
        marker_time: PERIOD_START_MARKER,
        minute: 1,
        home_lineup: first.home_lineup.clone(),
        away_lineup: first.away_lineup.clone(),
    }];

    let mut prev = (&first.home_lineup, &first.away_lineup);
    for row in &table.rows {
        if (&row.home_lineup, &row.away_lineup) != prev {
            changes.push(LineupChange {
                season: table.game.season,
                gamecode: table.game.gamecode,
                period: row.event.period,
                marker_time: row.event.marker_time,
                minute: row.event.minute,
                home_lineup: row.home_lineup.clone(),
                away_lineup: row.away_lineup.clone(),
            });
        }
        prev = (&row.home_lineup, &row.away_lineup);
    }

    keep_last_per_clock(changes)
}

fn keep_last_per_clock(changes: Vec<LineupChange>) -> Vec<LineupChange> {
    let mut seen = HashSet::new();
    let mut kept: Vec<LineupChange> = changes
        .into_iter()
        .rev()
        .filter(|c| seen.insert(c.clock_key()))
        .collect();
    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineups::LineupReport;
    use crate::models::{EnrichedEvent, GameKey, GameTeams, PbpEvent, PlayType};

    fn lineup(ids: [&str; 5]) -> Lineup {
        Lineup::from_ids(ids).unwrap()
    }

    fn make_row(period: u8, marker: u16, minute: u8, home: [&str; 5], away: [&str; 5]) -> EnrichedEvent {
        EnrichedEvent {
            event: PbpEvent {
                season: 2023,
                gamecode: 9,
                ordinal: 0,
                period,
                marker_time: MarkerTime::from_seconds(marker),
                minute,
                team: None,
                play_type: PlayType::SubIn,
                player_id: None,
                player: None,
                play_info: None,
            },
            home_lineup: lineup(home),
            away_lineup: lineup(away),
            is_home_team: None,
            valid_lineup: None,
        }
    }

    fn make_table(rows: Vec<EnrichedEvent>) -> EnrichedEventTable {
        EnrichedEventTable {
            game: GameKey::new(2023, 9),
            teams: GameTeams::new("HOM", "AWY"),
            rows,
            report: LineupReport::default(),
        }
    }

    const H0: [&str; 5] = ["A", "B", "C", "D", "E"];
    const H1: [&str; 5] = ["F", "B", "C", "D", "E"];
    const A0: [&str; 5] = ["V", "W", "X", "Y", "Z"];
    const A1: [&str; 5] = ["V", "W", "X", "Y", "Q"];

    #[test]
    fn test_empty_table() {
        assert!(lineup_changes(&make_table(Vec::new())).is_empty());
    }

    #[test]
    fn test_starting_row_only() {
        let table = make_table(vec![make_row(1, 600, 1, H0, A0), make_row(1, 590, 1, H0, A0)]);
        let changes = lineup_changes(&table);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].marker_time, PERIOD_START_MARKER);
        assert_eq!(changes[0].home_lineup, lineup(H0));
    }

    #[test]
    fn test_changes_recorded_at_row_clock() {
        let table = make_table(vec![
            make_row(1, 600, 1, H0, A0),
            make_row(1, 300, 6, H1, A0),
            make_row(2, 540, 12, H1, A1),
        ]);
        let changes = lineup_changes(&table);
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[1].minute, 6);
        assert_eq!(changes[1].home_lineup, lineup(H1));
        assert_eq!(changes[2].period, 2);
        assert_eq!(changes[2].away_lineup, lineup(A1));
    }

    #[test]
    fn test_same_clock_keeps_last() {
        let table = make_table(vec![
            make_row(1, 600, 1, H0, A0),
            make_row(1, 300, 6, H1, A0),
            make_row(1, 300, 6, H1, A1),
        ]);
        let changes = lineup_changes(&table);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1].home_lineup, lineup(H1));
        assert_eq!(changes[1].away_lineup, lineup(A1));
    }
}
