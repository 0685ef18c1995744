//! Table and row types exchanged with the data source and downstream
//! consumers.

pub mod boxscore;
pub mod clock;
pub mod enriched;
pub mod events;
mod fields;
pub mod game;
pub mod lineup;

pub use boxscore::{BoxscoreEntry, BoxscoreTable, REQUIRED_BOXSCORE_COLUMNS};
pub use clock::MarkerTime;
pub use enriched::{EnrichedEvent, EnrichedEventTable};
pub use events::{EventTable, PbpEvent, PlayType, REQUIRED_EVENT_COLUMNS};
pub use game::{GameKey, GameTeams, TeamSide};
pub use lineup::{Lineup, SwapOutcome, LINEUP_SIZE};
