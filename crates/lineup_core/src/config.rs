//! # Resolver Configuration
//!
//! 교체 매칭 / 검증 동작을 한 곳에서 관리.
//!
//! ```rust
//! use lineup_core::config::{PairingScope, ResolverConfig};
//!
//! let config = ResolverConfig::default();
//! assert_eq!(config.pairing, PairingScope::AnyTeam);
//! let fast = ResolverConfig::fast();
//! assert!(!fast.validate);
//! ```

use serde::{Deserialize, Serialize};

/// Which substitution rows may pair with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PairingScope {
    /// Nearest opposite-type row regardless of team. A cross-team pair is
    /// reported and applied to the acting team's five.
    #[default]
    AnyTeam,
    /// Only the acting team's substitutions are candidates
    SameTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Run the validity pass and fill `VALID_LINEUP`
    #[serde(default = "default_true")]
    pub validate: bool,
    #[serde(default)]
    pub pairing: PairingScope,
    /// Report pairs whose period/minute/marker differ
    #[serde(default = "default_true")]
    pub check_clock: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            validate: true,
            pairing: PairingScope::AnyTeam,
            check_clock: true,
        }
    }
}

impl ResolverConfig {
    /// Lineups only: no validity column, no clock checks.
    pub fn fast() -> Self {
        Self {
            validate: false,
            check_clock: false,
            ..Self::default()
        }
    }

    /// Pair substitutions within the acting team only.
    pub fn same_team() -> Self {
        Self {
            pairing: PairingScope::SameTeam,
            ..Self::default()
        }
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
