//! Field-level serde helpers shared by the table row types.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::clock::MarkerTime;

/// Trim a code/id field and map blanks to `None`.
///
/// The feed pads team codes and player ids with trailing spaces.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Like [`trimmed`] but the field must be present and non-blank.
pub(crate) fn trimmed_required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let s = raw.trim();
    if s.is_empty() {
        return Err(D::Error::custom("expected a non-empty code"));
    }
    Ok(s.to_string())
}

/// Countdown marker where `null` and blank both mean "no marker".
pub(crate) fn marker_time<'de, D>(deserializer: D) -> Result<MarkerTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(D::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Boolean column that may arrive as `true`, `1`, `1.0` or `"1"`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(b) => Ok(b),
        FlagRepr::Int(i) => Ok(i != 0),
        FlagRepr::Float(f) => Ok(f != 0.0),
        FlagRepr::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag value {:?}", other))),
        },
    }
}
