//! Validity pass.
//!
//! Reads only the snapshots already attached to each row, so running it
//! again on an annotated table yields the same flags.

use tracing::warn;

use crate::models::{EnrichedEvent, EnrichedEventTable, PlayType};

/// Whether presence-checking applies to this row at all.
///
/// `OUT` rows name a player who is leaving, and team-level rows have no
/// player.
pub fn is_checkable(row: &EnrichedEvent) -> bool {
    row.event.play_type != PlayType::SubOut && row.event.player_id.is_some()
}

/// Acting player is in either five, or the check does not apply.
pub fn is_row_valid(row: &EnrichedEvent) -> bool {
    match row.event.player_code() {
        Some(player) if is_checkable(row) => row.on_court(player),
        _ => true,
    }
}

/// Fill `VALID_LINEUP` for every row and refresh the report's validity
/// fields. Returns the number of invalid rows.
pub fn validate_lineups(table: &mut EnrichedEventTable) -> usize {
    let mut invalid_rows = Vec::new();
    let mut checked_rows = 0;

    for (index, row) in table.rows.iter_mut().enumerate() {
        if is_checkable(row) {
            checked_rows += 1;
        }
        let valid = is_row_valid(row);
        row.valid_lineup = Some(valid);

        if !valid {
            warn!(
                season = table.game.season,
                gamecode = table.game.gamecode,
                index,
                "player {} ({}) not in lineup at P{} {} (minute {})",
                row.event.player_code().unwrap_or_default(),
                row.event.play_type,
                row.event.period,
                row.event.marker_time,
                row.event.minute
            );
            invalid_rows.push(index);
        }
    }

    let count = invalid_rows.len();
    table.report.invalid_rows = invalid_rows;
    table.report.checked_rows = checked_rows;
    count
}
