//! # Lineup Anomaly Report
//!
//! Recovered per-event problems found while resolving one game. Nothing in
//! here aborts resolution; batch callers read the report to judge feed
//! quality.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::TeamSide;

/// Kind of recovered anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnomalyKind {
    /// No unconsumed opposite-type row left in the table
    UnmatchedSubstitution,
    /// Partner row found but its team and/or clock differ
    PairingMismatch {
        partner: usize,
        team: bool,
        clock: bool,
    },
    /// Outgoing player is not in the current five
    PlayerNotOnCourt { side: TeamSide, player_id: String },
    /// Incoming player is already in the current five
    PlayerAlreadyOnCourt { side: TeamSide, player_id: String },
    /// Substitution row without a player id
    MissingPlayerId,
    /// Substitution row whose team matches neither side
    UnknownTeam { team: Option<String> },
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnomalyKind::UnmatchedSubstitution => write!(f, "no matching substitution"),
            AnomalyKind::PairingMismatch {
                partner,
                team,
                clock,
            } => write!(
                f,
                "pairing with row {} mismatched (team={}, clock={})",
                partner, team, clock
            ),
            AnomalyKind::PlayerNotOnCourt { side, player_id } => {
                write!(f, "outgoing player {} not in {} lineup", player_id, side)
            }
            AnomalyKind::PlayerAlreadyOnCourt { side, player_id } => {
                write!(f, "incoming player {} already in {} lineup", player_id, side)
            }
            AnomalyKind::MissingPlayerId => write!(f, "substitution without player id"),
            AnomalyKind::UnknownTeam { team } => {
                write!(f, "substitution for unknown team {:?}", team)
            }
        }
    }
}

/// One recovered anomaly at a row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupAnomaly {
    pub index: usize,
    #[serde(flatten)]
    pub kind: AnomalyKind,
}

/// Everything the resolver noticed about one game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineupReport {
    /// Matching anomalies in row order
    pub anomalies: Vec<LineupAnomaly>,
    /// Pairings that changed a lineup
    pub substitutions_applied: u32,
    /// Rows flagged invalid by the last validity pass
    pub invalid_rows: Vec<usize>,
    /// Rows the last validity pass looked at
    pub checked_rows: usize,
}

impl LineupReport {
    pub fn push(&mut self, index: usize, kind: AnomalyKind) {
        self.anomalies.push(LineupAnomaly { index, kind });
    }

    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty() && self.invalid_rows.is_empty()
    }

    /// Share of checked rows whose acting player was on court (0.0-1.0).
    pub fn validity_rate(&self) -> f64 {
        if self.checked_rows == 0 {
            return 1.0;
        }
        1.0 - self.invalid_rows.len() as f64 / self.checked_rows as f64
    }

    pub fn count_where<F>(&self, pred: F) -> usize
    where
        F: Fn(&AnomalyKind) -> bool,
    {
        self.anomalies.iter().filter(|a| pred(&a.kind)).count()
    }

    /// Human-readable summary lines for logs.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!(
            "substitutions applied: {}, anomalies: {}",
            self.substitutions_applied,
            self.anomalies.len()
        ));
        if self.checked_rows > 0 {
            lines.push(format!(
                "validity: {}/{} rows ({:.1}%)",
                self.checked_rows - self.invalid_rows.len(),
                self.checked_rows,
                self.validity_rate() * 100.0
            ));
        }
        for a in &self.anomalies {
            lines.push(format!("  - row {}: {}", a.index, a.kind));
        }
        lines
    }
}
