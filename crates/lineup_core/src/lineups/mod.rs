//! # Lineup Reconstruction
//!
//! Starting fives from the boxscore, then one forward walk over the
//! play-by-play that applies paired substitutions.
//!
//! - `starting` - Starting Lineup Extractor
//! - `matching` - IN/OUT pairing over a consumed-index set
//! - `resolver` - Substitution Resolver and the public entry points
//! - `validation` - Validity pass over the attached snapshots
//! - `report` - Recovered anomalies
//! - `changes` - Lineup change log

pub mod changes;
pub mod matching;
pub mod report;
pub mod resolver;
pub mod starting;
pub mod validation;


pub use changes::{lineup_changes, LineupChange, PERIOD_START_MARKER};
pub use matching::{find_partner, ConsumedSet, PairingCheck};
pub use report::{AnomalyKind, LineupAnomaly, LineupReport};
pub use resolver::{resolve_lineups, resolve_lineups_with_config, SubstitutionResolver};
pub use starting::{extract_starting_lineups, extract_teams, StartingLineups};
pub use validation::{is_row_valid, validate_lineups};
