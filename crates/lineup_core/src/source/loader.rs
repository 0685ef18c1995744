//! CSV / JSON loading for the event and boxscore tables.
//!
//! Headers are checked against the required column list before any row is
//! deserialized, so a truncated export fails with `MissingColumn` instead of
//! a row-level CSV error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{LineupError, Result};
use crate::models::{
    BoxscoreEntry, BoxscoreTable, EventTable, PbpEvent, REQUIRED_BOXSCORE_COLUMNS,
    REQUIRED_EVENT_COLUMNS,
};

fn check_headers(headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(LineupError::MissingColumn {
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

fn read_csv_rows<R, T>(reader: R, required: &[&str]) -> Result<Vec<T>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    check_headers(&headers, required)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

// ============================================================================
// EventTable
// ============================================================================

impl EventTable {
    /// Parse a play-by-play CSV export (header row required).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let rows: Vec<PbpEvent> = read_csv_rows(reader, REQUIRED_EVENT_COLUMNS)?;
        debug!(rows = rows.len(), "loaded play-by-play CSV");
        Ok(Self::new(rows))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Parse a JSON array of event rows keyed by the feed's column names.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: Vec<PbpEvent> = serde_json::from_str(json)?;
        Ok(Self::new(rows))
    }
}

// ============================================================================
// BoxscoreTable
// ============================================================================

impl BoxscoreTable {
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let rows: Vec<BoxscoreEntry> = read_csv_rows(reader, REQUIRED_BOXSCORE_COLUMNS)?;
        debug!(rows = rows.len(), "loaded boxscore CSV");
        Ok(Self::new(rows))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: Vec<BoxscoreEntry> = serde_json::from_str(json)?;
        Ok(Self::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarkerTime, PlayType};
    use std::io::Write;

    const EVENTS_CSV: &str = "\
Season,Gamecode,NUMBEROFPLAY,PERIOD,MARKERTIME,MINUTE,CODETEAM,PLAYTYPE,PLAYER_ID,PLAYER,PLAYINFO
2023,1,0,1,,1,,BP,,,Begin Period
2023,1,1,1,09:48,1,HOM      ,OUT,P00A   ,\"DOE, JOHN\",Out
2023,1,2,1,09:48,1,HOM,IN,P00F,\"ROE, JIM\",In
2023,1,3,1,09:40,1,AWY,2FGM,P00V,,Two Pointer
";

    const BOXSCORE_CSV: &str = "\
Season,Gamecode,Team,Home,Player_ID,IsStarter,Player
2023,1,HOM,1,P00A,1,DOE
2023,1,HOM,1,P00F,0,ROE
2023,1,AWY,0,P00V,1.0,VAN
2023,1,AWY,0,,0,Team
";

    #[test]
    fn test_events_from_csv() {
        let table = EventTable::from_csv_reader(EVENTS_CSV.as_bytes()).unwrap();

        assert_eq!(table.len(), 4);
        let rows = table.rows();
        assert_eq!(rows[0].play_type, PlayType::PeriodBegin);
        assert_eq!(rows[0].marker_time, MarkerTime::EMPTY);
        assert_eq!(rows[0].team, None);
        assert_eq!(rows[1].team.as_deref(), Some("HOM"));
        assert_eq!(rows[1].player_id.as_deref(), Some("P00A"));
        assert_eq!(rows[1].player.as_deref(), Some("DOE, JOHN"));
        assert_eq!(rows[1].marker_time, MarkerTime::from_seconds(588));
        assert_eq!(rows[3].play_type, PlayType::TwoPointMade);
        assert_eq!(table.substitution_count(), 2);
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "\
Season,Gamecode,NUMBEROFPLAY,PERIOD,MARKERTIME,MINUTE,CODETEAM,PLAYTYPE,PLAYER_ID
2023,1,0,1,10:00,1,HOM,TOUT,
";
        let table = EventTable::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].player, None);
        assert_eq!(table.rows()[0].play_type, PlayType::Timeout);
    }

    #[test]
    fn test_missing_column_rejected_before_rows() {
        let csv = "\
Season,Gamecode,NUMBEROFPLAY,PERIOD,MARKERTIME,MINUTE,PLAYTYPE,PLAYER_ID
2023,1,0,1,10:00,1,BP,
";
        let err = EventTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LineupError::MissingColumn { ref column } if column == "CODETEAM"
        ));
    }

    #[test]
    fn test_json_missing_column_rejected() {
        // no CODETEAM key at all, unlike an explicit null
        let err = EventTable::from_json_str(
            r#"[{"Season":2023,"Gamecode":1,"NUMBEROFPLAY":1,"PERIOD":1,
                "MARKERTIME":"09:48","MINUTE":1,"PLAYTYPE":"OUT","PLAYER_ID":"P00A"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LineupError::Json(_)));
        assert!(err.to_string().contains("CODETEAM"));

        let err = BoxscoreTable::from_json_str(
            r#"[{"Season":2023,"Gamecode":1,"Team":"HOM","Home":1,"IsStarter":1}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Player_ID"));
    }

    #[test]
    fn test_json_null_marker_is_empty() {
        let events = EventTable::from_json_str(
            r#"[{"Season":2023,"Gamecode":1,"NUMBEROFPLAY":0,"PERIOD":1,
                "MARKERTIME":null,"MINUTE":1,"CODETEAM":null,"PLAYTYPE":"BP",
                "PLAYER_ID":null}]"#,
        )
        .unwrap();
        assert_eq!(events.rows()[0].marker_time, MarkerTime::EMPTY);
        assert_eq!(events.rows()[0].team, None);
    }

    #[test]
    fn test_bad_row_is_csv_error() {
        let csv = "\
Season,Gamecode,NUMBEROFPLAY,PERIOD,MARKERTIME,MINUTE,CODETEAM,PLAYTYPE,PLAYER_ID
2023,1,0,1,ab:cd,1,HOM,BP,
";
        let err = EventTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LineupError::Csv(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_boxscore_from_csv() {
        let table = BoxscoreTable::from_csv_reader(BOXSCORE_CSV.as_bytes()).unwrap();

        assert_eq!(table.len(), 4);
        let rows = table.rows();
        assert!(rows[0].is_home && rows[0].is_starter);
        assert!(!rows[1].is_starter);
        assert!(!rows[2].is_home && rows[2].is_starter);
        assert_eq!(rows[3].player_id, None);
        assert_eq!(table.starters().count(), 2);
    }

    #[test]
    fn test_boxscore_missing_starter_column() {
        let csv = "Season,Gamecode,Team,Home,Player_ID\n2023,1,HOM,1,P00A\n";
        let err = BoxscoreTable::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LineupError::MissingColumn { ref column } if column == "IsStarter"
        ));
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EVENTS_CSV.as_bytes()).unwrap();

        let table = EventTable::from_csv_path(file.path()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoxscoreTable::from_csv_path(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LineupError::Io(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_from_json_str() {
        let events = EventTable::from_json_str(
            r#"[{"Season":2023,"Gamecode":1,"NUMBEROFPLAY":5,"PERIOD":2,
                "MARKERTIME":"04:30","MINUTE":16,"CODETEAM":"AWY ","PLAYTYPE":"AS",
                "PLAYER_ID":"P00V"}]"#,
        )
        .unwrap();
        assert_eq!(events.rows()[0].team.as_deref(), Some("AWY"));
        assert_eq!(events.rows()[0].play_type, PlayType::Assist);

        let boxscore = BoxscoreTable::from_json_str(
            r#"[{"Season":2023,"Gamecode":1,"Team":"AWY","Home":false,
                "Player_ID":"P00V","IsStarter":true}]"#,
        )
        .unwrap();
        assert!(boxscore.rows()[0].is_starter);
    }
}
