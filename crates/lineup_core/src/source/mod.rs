//! # Data Source
//!
//! 경기 데이터(play-by-play, boxscore)를 가져오는 경계.
//! 리졸버는 이 트레이트만 보고, 데이터가 메모리/파일/원격 중 어디서 오는지 모른다.
//!
//! - `InMemorySource` - pre-loaded tables keyed by game
//! - `CsvDirSource` - one CSV pair per game in a directory
//! - `loader` - CSV / JSON table parsing

pub mod loader;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::{LineupError, Result};
use crate::lineups::resolve_lineups_with_config;
use crate::models::{BoxscoreTable, EnrichedEventTable, EventTable, GameKey};

/// Where a game's raw tables come from.
pub trait DataSource {
    fn fetch_events(&self, game: GameKey) -> Result<EventTable>;
    fn fetch_boxscore(&self, game: GameKey) -> Result<BoxscoreTable>;
}

/// Fetch both tables for `game` and resolve its lineups.
pub fn resolve_game<S: DataSource + ?Sized>(
    source: &S,
    game: GameKey,
    config: &ResolverConfig,
) -> Result<EnrichedEventTable> {
    let events = source.fetch_events(game)?;
    let boxscore = source.fetch_boxscore(game)?;
    debug!(
        season = game.season,
        gamecode = game.gamecode,
        events = events.len(),
        boxscore = boxscore.len(),
        "fetched game tables"
    );
    resolve_lineups_with_config(&events, &boxscore, config)
}

// ============================================================================
// InMemorySource
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    games: BTreeMap<GameKey, (EventTable, BoxscoreTable)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one game's tables under the event table's game key.
    ///
    /// Replaces any tables already stored for that game.
    pub fn insert(&mut self, events: EventTable, boxscore: BoxscoreTable) -> Result<GameKey> {
        let game = events.game_key()?;
        self.games.insert(game, (events, boxscore));
        Ok(game)
    }

    /// Stored games in (season, gamecode) order.
    pub fn games(&self) -> Vec<GameKey> {
        self.games.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn get(&self, game: GameKey) -> Result<&(EventTable, BoxscoreTable)> {
        self.games.get(&game).ok_or(LineupError::GameNotFound(game))
    }
}

impl DataSource for InMemorySource {
    fn fetch_events(&self, game: GameKey) -> Result<EventTable> {
        self.get(game).map(|(events, _)| events.clone())
    }

    fn fetch_boxscore(&self, game: GameKey) -> Result<BoxscoreTable> {
        self.get(game).map(|(_, boxscore)| boxscore.clone())
    }
}

// ============================================================================
// CsvDirSource
// ============================================================================

/// Reads `pbp_{season}_{gamecode}.csv` and `boxscore_{season}_{gamecode}.csv`
/// from a single directory.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    root: PathBuf,
}

impl CsvDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn events_path(&self, game: GameKey) -> PathBuf {
        self.root
            .join(format!("pbp_{}_{}.csv", game.season, game.gamecode))
    }

    pub fn boxscore_path(&self, game: GameKey) -> PathBuf {
        self.root
            .join(format!("boxscore_{}_{}.csv", game.season, game.gamecode))
    }

    fn existing(&self, path: PathBuf, game: GameKey) -> Result<PathBuf> {
        if path.is_file() {
            Ok(path)
        } else {
            Err(LineupError::GameNotFound(game))
        }
    }
}

impl DataSource for CsvDirSource {
    fn fetch_events(&self, game: GameKey) -> Result<EventTable> {
        let path = self.existing(self.events_path(game), game)?;
        EventTable::from_csv_path(path)
    }

    fn fetch_boxscore(&self, game: GameKey) -> Result<BoxscoreTable> {
        let path = self.existing(self.boxscore_path(game), game)?;
        BoxscoreTable::from_csv_path(path)
    }
}
