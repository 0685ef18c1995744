//! Period-relative countdown clock (`MARKERTIME`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Countdown marker in `"MM:SS"` form, stored as seconds remaining.
///
/// Period-boundary rows carry an empty marker, which maps to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MarkerTime(Option<u16>);

impl MarkerTime {
    pub const EMPTY: MarkerTime = MarkerTime(None);

    pub const fn from_seconds(seconds: u16) -> Self {
        MarkerTime(Some(seconds))
    }

    /// Seconds remaining in the period, if the row carried a marker.
    pub const fn seconds(self) -> Option<u16> {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

impl FromStr for MarkerTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(MarkerTime(None));
        }

        let (min, sec) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid marker time {:?}: expected MM:SS", s))?;
        let min: u16 = min
            .trim()
            .parse()
            .map_err(|_| format!("invalid marker minutes in {:?}", s))?;
        let sec: u16 = sec
            .trim()
            .parse()
            .map_err(|_| format!("invalid marker seconds in {:?}", s))?;
        if sec >= 60 {
            return Err(format!("invalid marker seconds in {:?}", s));
        }

        min.checked_mul(60)
            .and_then(|m| m.checked_add(sec))
            .map(|total| MarkerTime(Some(total)))
            .ok_or_else(|| format!("marker time {:?} out of range", s))
    }
}

impl TryFrom<String> for MarkerTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkerTime> for String {
    fn from(value: MarkerTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MarkerTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(total) => write!(f, "{:02}:{:02}", total / 60, total % 60),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker() {
        let m: MarkerTime = "09:45".parse().unwrap();
        assert_eq!(m.seconds(), Some(585));
        assert_eq!(m.to_string(), "09:45");

        let m: MarkerTime = " 10:00 ".parse().unwrap();
        assert_eq!(m.seconds(), Some(600));
    }

    #[test]
    fn test_empty_marker() {
        let m: MarkerTime = "".parse().unwrap();
        assert!(m.is_empty());
        assert_eq!(m.to_string(), "");
        assert_eq!(m, MarkerTime::EMPTY);
    }

    #[test]
    fn test_reject_malformed_marker() {
        assert!("945".parse::<MarkerTime>().is_err());
        assert!("09:75".parse::<MarkerTime>().is_err());
        assert!("ab:cd".parse::<MarkerTime>().is_err());
        assert!("9999:00".parse::<MarkerTime>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let m = MarkerTime::from_seconds(65);
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"01:05\"");
        let back: MarkerTime = serde_json::from_str("\"01:05\"").unwrap();
        assert_eq!(back, m);
    }
}
