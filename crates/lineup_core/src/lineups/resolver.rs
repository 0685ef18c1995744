//! Substitution Resolver
//!
//! 이벤트 순서대로 한 번만 순회하면서 홈/원정 5인을 갱신하고,
//! 각 이벤트에 그 시점의 라인업 복사본을 붙인다.
//!
//! ## Pairing
//! - `OUT`/`IN` 어느 쪽이 먼저 와도 앞으로 스캔해서 짝을 찾는다
//! - 짝이 된 두 행은 consumed 처리, 두 번째 행은 라인업을 그대로 이어받는다
//! - team/clock 불일치는 경고만 남기고 고치지 않는다
//! - 팀이 다른 짝도 그대로 적용: 교체를 시작한 행(acting team)의 5인에 반영
//!
//! ## Roster swap
//! - 나가는 선수 슬롯에 들어오는 선수를 넣고 나머지 4슬롯은 유지
//! - 나가는 선수가 5인에 없으면 그대로 둔다 (슬롯 추측 금지)

use tracing::{debug, warn};

use super::matching::{find_partner, ConsumedSet, PairingCheck};
use super::report::{AnomalyKind, LineupReport};
use super::starting::{extract_starting_lineups, StartingLineups};
use super::validation::validate_lineups;
use crate::config::{PairingScope, ResolverConfig};
use crate::error::{LineupError, Result};
use crate::models::{
    BoxscoreTable, EnrichedEvent, EnrichedEventTable, EventTable, GameKey, GameTeams, Lineup,
    PbpEvent, PlayType, SwapOutcome, TeamSide,
};

/// Walks one game's events and tracks both fives.
pub struct SubstitutionResolver<'a> {
    events: &'a [PbpEvent],
    game: GameKey,
    teams: &'a GameTeams,
    scope: PairingScope,
    check_clock: bool,
    consumed: ConsumedSet,
    home: Lineup,
    away: Lineup,
    report: LineupReport,
}

impl<'a> SubstitutionResolver<'a> {
    pub fn new(
        events: &'a [PbpEvent],
        game: GameKey,
        starting: &'a StartingLineups,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            events,
            game,
            teams: &starting.teams,
            scope: config.pairing,
            check_clock: config.check_clock,
            consumed: ConsumedSet::with_len(events.len()),
            home: starting.home.clone(),
            away: starting.away.clone(),
            report: LineupReport::default(),
        }
    }

    /// Process every row and return the annotated rows plus the report.
    ///
    /// The validity column is left empty; see
    /// [`super::validation::validate_lineups`].
    pub fn run(mut self) -> (Vec<EnrichedEvent>, LineupReport) {
        let events = self.events;
        let mut rows = Vec::with_capacity(events.len());

        for (index, event) in events.iter().enumerate() {
            if event.play_type.is_substitution() && !self.consumed.contains(index) {
                self.resolve_substitution(index);
            }

            let side = self.teams.side_of(event.team_code());
            rows.push(EnrichedEvent {
                event: event.clone(),
                home_lineup: self.home.clone(),
                away_lineup: self.away.clone(),
                is_home_team: side.home_flag(),
                valid_lineup: None,
            });
        }

        debug!(
            season = self.game.season,
            gamecode = self.game.gamecode,
            consumed = self.consumed.len(),
            applied = self.report.substitutions_applied,
            "substitution walk finished"
        );

        (rows, self.report)
    }

    fn record(&mut self, index: usize, kind: AnomalyKind) {
        warn!(
            season = self.game.season,
            gamecode = self.game.gamecode,
            index,
            "lineup anomaly: {}",
            kind
        );
        self.report.push(index, kind);
    }

    fn resolve_substitution(&mut self, index: usize) {
        let events = self.events;
        let origin = &events[index];

        let side = self.teams.side_of(origin.team_code());
        if !side.is_known() {
            self.record(
                index,
                AnomalyKind::UnknownTeam {
                    team: origin.team.clone(),
                },
            );
            return;
        }

        self.consumed.mark(index);
        let Some(partner_idx) = find_partner(events, index, &self.consumed, self.scope) else {
            self.record(index, AnomalyKind::UnmatchedSubstitution);
            return;
        };
        self.consumed.mark(partner_idx);
        let partner = &events[partner_idx];

        let check = PairingCheck::compare(origin, partner);
        let clock_mismatch = self.check_clock && !check.clock_matches;
        if !check.team_matches || clock_mismatch {
            self.record(
                index,
                AnomalyKind::PairingMismatch {
                    partner: partner_idx,
                    team: !check.team_matches,
                    clock: !check.clock_matches,
                },
            );
        }

        let (outgoing, incoming) = if origin.play_type == PlayType::SubOut {
            (origin, partner)
        } else {
            (partner, origin)
        };
        let (Some(out_id), Some(in_id)) = (outgoing.player_code(), incoming.player_code()) else {
            self.record(index, AnomalyKind::MissingPlayerId);
            return;
        };

        // the acting team's five, even when the partner row names the other team
        let roster = match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
            TeamSide::Unknown => return,
        };
        match roster.substitute(out_id, in_id) {
            SwapOutcome::Swapped { .. } => self.report.substitutions_applied += 1,
            SwapOutcome::SamePlayer => {}
            SwapOutcome::OutgoingMissing => self.record(
                index,
                AnomalyKind::PlayerNotOnCourt {
                    side,
                    player_id: out_id.to_string(),
                },
            ),
            SwapOutcome::IncomingPresent => self.record(
                index,
                AnomalyKind::PlayerAlreadyOnCourt {
                    side,
                    player_id: in_id.to_string(),
                },
            ),
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Attach on-court fives to every row of a single game.
///
/// With `validate` set, the `VALID_LINEUP` column is filled as well.
pub fn resolve_lineups(
    events: &EventTable,
    boxscore: &BoxscoreTable,
    validate: bool,
) -> Result<EnrichedEventTable> {
    let config = ResolverConfig::default().with_validation(validate);
    resolve_lineups_with_config(events, boxscore, &config)
}

/// [`resolve_lineups`] with explicit pairing/validation settings.
///
/// # Errors
/// Structural problems only: an empty or mixed-game event table, a boxscore
/// for another game, or a boxscore that does not name five starters per
/// team. Per-row problems end up in the returned report.
pub fn resolve_lineups_with_config(
    events: &EventTable,
    boxscore: &BoxscoreTable,
    config: &ResolverConfig,
) -> Result<EnrichedEventTable> {
    let game = events.game_key()?;
    if let Some(boxscore_game) = boxscore.game_key()? {
        if boxscore_game != game {
            return Err(LineupError::GameMismatch {
                events: game,
                boxscore: boxscore_game,
            });
        }
    }

    let starting = extract_starting_lineups(boxscore)?;
    let (rows, report) = SubstitutionResolver::new(events.rows(), game, &starting, config).run();

    let mut table = EnrichedEventTable {
        game,
        teams: starting.teams,
        rows,
        report,
    };
    if config.validate {
        validate_lineups(&mut table);
    }

    debug!(
        season = game.season,
        gamecode = game.gamecode,
        rows = table.len(),
        anomalies = table.report.anomalies.len(),
        "lineups resolved"
    );
    Ok(table)
}
