//! Multi-game batch resolution.
//!
//! Games are independent, so a batch fans out over the rayon pool once it
//! is large enough to pay for the overhead. Output order always matches
//! input order.

use rayon::prelude::*;
use tracing::info;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::lineups::resolve_lineups_with_config;
use crate::models::{BoxscoreTable, EnrichedEventTable, EventTable, GameKey};
use crate::source::{resolve_game, DataSource};

/// Below this many games the batch runs sequentially.
pub const PARALLEL_THRESHOLD: usize = 8;

/// Raw tables for one game.
#[derive(Debug, Clone)]
pub struct GameInput {
    pub events: EventTable,
    pub boxscore: BoxscoreTable,
}

impl GameInput {
    pub fn new(events: EventTable, boxscore: BoxscoreTable) -> Self {
        Self { events, boxscore }
    }
}

/// Result for one game of a batch.
#[derive(Debug)]
pub struct GameOutcome {
    /// `None` when the event table itself could not name a game
    pub game: Option<GameKey>,
    pub result: Result<EnrichedEventTable>,
}

impl GameOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub games: usize,
    pub failed: usize,
    pub anomalies: usize,
    pub invalid_rows: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[GameOutcome]) -> Self {
        let mut summary = Self {
            games: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match &outcome.result {
                Ok(table) => {
                    summary.anomalies += table.report.anomalies.len();
                    summary.invalid_rows += table.report.invalid_rows.len();
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

fn resolve_input(input: &GameInput, config: &ResolverConfig) -> GameOutcome {
    GameOutcome {
        game: input.events.game_key().ok(),
        result: resolve_lineups_with_config(&input.events, &input.boxscore, config),
    }
}

fn log_summary(outcomes: &[GameOutcome]) {
    let summary = BatchSummary::from_outcomes(outcomes);
    info!(
        games = summary.games,
        failed = summary.failed,
        anomalies = summary.anomalies,
        invalid_rows = summary.invalid_rows,
        "batch resolved"
    );
}

/// Resolve every game in `inputs`. A structural error fails only its own
/// game.
pub fn resolve_games(inputs: &[GameInput], config: &ResolverConfig) -> Vec<GameOutcome> {
    let outcomes: Vec<GameOutcome> = if inputs.len() > PARALLEL_THRESHOLD {
        inputs
            .par_iter()
            .map(|input| resolve_input(input, config))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| resolve_input(input, config))
            .collect()
    };

    log_summary(&outcomes);
    outcomes
}

/// [`resolve_games`] over games fetched from a [`DataSource`].
pub fn resolve_games_from_source<S>(
    source: &S,
    games: &[GameKey],
    config: &ResolverConfig,
) -> Vec<GameOutcome>
where
    S: DataSource + Sync + ?Sized,
{
    let run = |game: &GameKey| GameOutcome {
        game: Some(*game),
        result: resolve_game(source, *game, config),
    };

    let outcomes: Vec<GameOutcome> = if games.len() > PARALLEL_THRESHOLD {
        games.par_iter().map(run).collect()
    } else {
        games.iter().map(run).collect()
    };

    log_summary(&outcomes);
    outcomes
}
