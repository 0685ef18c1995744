//! Substitution pairing.
//!
//! `IN`/`OUT` rows of one physical substitution are not guaranteed to be
//! adjacent or ordered. Pairing scans forward from the current row for the
//! nearest unconsumed row of the opposite sub type, like matching brackets
//! that may arrive in either order.

use crate::config::PairingScope;
use crate::models::PbpEvent;

/// Row indices already used by a resolved pairing.
#[derive(Debug, Clone, Default)]
pub struct ConsumedSet {
    marks: Vec<bool>,
    count: usize,
}

impl ConsumedSet {
    pub fn with_len(len: usize) -> Self {
        Self {
            marks: vec![false; len],
            count: 0,
        }
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Mark `index`; returns `false` if it was already consumed.
    pub fn mark(&mut self, index: usize) -> bool {
        if index >= self.marks.len() {
            self.marks.resize(index + 1, false);
        }
        if self.marks[index] {
            return false;
        }
        self.marks[index] = true;
        self.count += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Find the partner row for the substitution at `from`.
///
/// Scans `events[from + 1..]`, skipping consumed rows, and returns the
/// first row of the opposite sub type that the scope allows. Returns `None`
/// for non-substitution rows or when the rest of the table holds no
/// candidate.
pub fn find_partner(
    events: &[PbpEvent],
    from: usize,
    consumed: &ConsumedSet,
    scope: PairingScope,
) -> Option<usize> {
    let origin = events.get(from)?;
    let wanted = origin.play_type.counterpart()?;

    events
        .iter()
        .enumerate()
        .skip(from + 1)
        .filter(|(i, _)| !consumed.contains(*i))
        .find(|(_, e)| {
            e.play_type == wanted
                && match scope {
                    PairingScope::SameTeam => e.team == origin.team,
                    PairingScope::AnyTeam => true,
                }
        })
        .map(|(i, _)| i)
}

/// Sanity check of a resolved pairing. Mismatches are reported, never fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingCheck {
    pub team_matches: bool,
    pub clock_matches: bool,
}

impl PairingCheck {
    pub fn compare(a: &PbpEvent, b: &PbpEvent) -> Self {
        Self {
            team_matches: a.team == b.team,
            clock_matches: a.clock() == b.clock(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.team_matches && self.clock_matches
    }
}
