//! Five-player roster snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Players on court per team.
pub const LINEUP_SIZE: usize = 5;

/// Ordered five-player roster of one team.
///
/// Slot order is the starting order with substitutes taking over the slot
/// of the player they replaced. Only membership matters for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineup {
    players: [String; LINEUP_SIZE],
}

/// What happened when a substitution was applied to a [`Lineup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Outgoing player replaced at `slot`
    Swapped { slot: usize },
    /// Outgoing and incoming are the same player; nothing changed
    SamePlayer,
    /// Outgoing player is not on court; nothing changed
    OutgoingMissing,
    /// Incoming player is already on court; nothing changed
    IncomingPresent,
}

impl Lineup {
    /// Build from any five ids, `None` if the count is wrong.
    pub fn from_ids<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<String> = ids.into_iter().map(Into::into).collect();
        let players: [String; LINEUP_SIZE] = players.try_into().ok()?;
        Some(Self { players })
    }

    pub fn players(&self) -> &[String; LINEUP_SIZE] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.position(player_id).is_some()
    }

    pub fn position(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player_id)
    }

    /// No player listed twice.
    pub fn is_distinct(&self) -> bool {
        self.players
            .iter()
            .enumerate()
            .all(|(i, p)| !self.players[i + 1..].contains(p))
    }

    /// Replace `outgoing` with `incoming` in place, keeping the other four
    /// slots untouched.
    pub fn substitute(&mut self, outgoing: &str, incoming: &str) -> SwapOutcome {
        if outgoing == incoming {
            return SwapOutcome::SamePlayer;
        }
        let Some(slot) = self.position(outgoing) else {
            return SwapOutcome::OutgoingMissing;
        };
        if self.contains(incoming) {
            return SwapOutcome::IncomingPresent;
        }
        self.players[slot] = incoming.to_string();
        SwapOutcome::Swapped { slot }
    }

    /// Slots whose occupant differs between two snapshots.
    pub fn changed_slots(&self, other: &Lineup) -> Vec<usize> {
        (0..LINEUP_SIZE)
            .filter(|&i| self.players[i] != other.players[i])
            .collect()
    }
}

impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.players.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Lineup {
        Lineup::from_ids(["A", "B", "C", "D", "E"]).unwrap()
    }

    #[test]
    fn test_from_ids_requires_five() {
        assert!(Lineup::from_ids(["A", "B", "C", "D"]).is_none());
        assert!(Lineup::from_ids(["A", "B", "C", "D", "E", "F"]).is_none());
        assert!(home().is_distinct());
    }

    #[test]
    fn test_substitute_keeps_slot() {
        let mut lineup = home();
        assert_eq!(lineup.substitute("C", "F"), SwapOutcome::Swapped { slot: 2 });
        assert_eq!(lineup.iter().collect::<Vec<_>>(), ["A", "B", "F", "D", "E"]);
        assert_eq!(lineup.changed_slots(&home()), vec![2]);
    }

    #[test]
    fn test_substitute_noops() {
        let mut lineup = home();
        assert_eq!(lineup.substitute("A", "A"), SwapOutcome::SamePlayer);
        assert_eq!(lineup.substitute("Z", "F"), SwapOutcome::OutgoingMissing);
        assert_eq!(lineup.substitute("A", "B"), SwapOutcome::IncomingPresent);
        assert_eq!(lineup, home());
    }

    #[test]
    fn test_is_distinct_detects_duplicates() {
        let lineup = Lineup::from_ids(["A", "B", "A", "D", "E"]).unwrap();
        assert!(!lineup.is_distinct());
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&home()).unwrap();
        assert_eq!(json, r#"["A","B","C","D","E"]"#);
        assert_eq!(home().to_string(), "[A, B, C, D, E]");
    }
}
