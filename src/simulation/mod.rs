//! Season simulation and statistics aggregation.
//!
//! # Algorithm
//!
//! For each week in current schedule order, and each fixture in week order:
//!
//! 1. Ask the [`OutcomeProvider`] for a score and four named-event lists.
//! 2. Credit one game played to every player on both rosters.
//! 3. Add goals for/against to both teams.
//! 4. Count the win/draw/loss and record it in each team's recent form.
//! 5. Derived statistics are recomputed by the writes in steps 3-4.
//! 6. Resolve each event name against every roster in the season and
//!    increment the matching player statistic. Unknown names are dropped.
//!
//! After the last week the leaderboard is rebuilt from the settled
//! statistics. A provider failure aborts the pass; fixtures already applied
//! stay applied.
//!
//! Fixtures are applied strictly one at a time because every update is a
//! read-modify-write on shared team state.

pub mod random;

pub use random::RandomOutcomeProvider;

use std::collections::HashMap;

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::config::PlayerLookup;
use crate::error::{BoxError, LeagueError, Result};
use crate::leaderboard::Leaderboard;
use crate::models::{Fixture, PlayerPosition, PlayerStat, Team, TeamId};
use crate::schedule::Schedule;

/// Result of one game as reported by an outcome provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub home_goals: u32,
    pub away_goals: u32,
    /// Player names, one entry per goal (names may repeat).
    pub goal_scorers: Vec<String>,
    pub goal_assists: Vec<String>,
    pub tackles: Vec<String>,
    pub interceptions: Vec<String>,
}

impl MatchOutcome {
    /// A bare score line with no events.
    pub fn score(home_goals: u32, away_goals: u32) -> Self {
        Self {
            home_goals,
            away_goals,
            ..Default::default()
        }
    }

    pub fn with_scorers<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.goal_scorers.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_assists<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.goal_assists.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_tackles<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.tackles.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_interceptions<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.interceptions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Event lists paired with the player statistic they increment.
    pub fn events(&self) -> [(PlayerStat, &[String]); 4] {
        [
            (PlayerStat::Goals, self.goal_scorers.as_slice()),
            (PlayerStat::Assists, self.goal_assists.as_slice()),
            (PlayerStat::Tackles, self.tackles.as_slice()),
            (PlayerStat::Interceptions, self.interceptions.as_slice()),
        ]
    }
}

/// Source of match outcomes.
///
/// Implemented for closures of the same shape, which keeps scripted
/// providers in tests short.
pub trait OutcomeProvider {
    /// Produces the outcome of `home` vs `away`.
    fn simulate_game(&mut self, home: &Team, away: &Team)
        -> std::result::Result<MatchOutcome, BoxError>;
}

impl<F> OutcomeProvider for F
where
    F: FnMut(&Team, &Team) -> std::result::Result<MatchOutcome, BoxError>,
{
    fn simulate_game(
        &mut self,
        home: &Team,
        away: &Team,
    ) -> std::result::Result<MatchOutcome, BoxError> {
        self(home, away)
    }
}

/// Roster coordinates of a player: team index, position, index in position.
type PlayerSlot = (usize, PlayerPosition, usize);

/// Name → first matching player across all teams.
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    slots: HashMap<String, PlayerSlot>,
}

impl PlayerIndex {
    /// Indexes every player; for duplicate names the first one wins, in
    /// team order, then position order, then roster order.
    pub fn build(teams: &[Team]) -> Self {
        let mut slots = HashMap::new();
        for (t, team) in teams.iter().enumerate() {
            for (pos, i, name) in team.roster_slots() {
                slots.entry(name.to_string()).or_insert((t, pos, i));
            }
        }
        Self { slots }
    }

    fn get(&self, name: &str) -> Option<PlayerSlot> {
        self.slots.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn scan_for_player(teams: &[Team], name: &str) -> Option<PlayerSlot> {
    teams.iter().enumerate().find_map(|(t, team)| {
        team.roster_slots()
            .find(|(_, _, n)| *n == name)
            .map(|(pos, i, _)| (t, pos, i))
    })
}

/// Counters for one simulation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub weeks_played: usize,
    pub fixtures_played: usize,
    /// Events whose player name matched nobody.
    pub dropped_events: usize,
}

/// Drives a full pass over a schedule.
#[derive(Debug, Clone, Default)]
pub struct SeasonSimulator {
    lookup: PlayerLookup,
}

impl SeasonSimulator {
    pub fn new(lookup: PlayerLookup) -> Self {
        Self { lookup }
    }

    /// Plays every fixture of `schedule` against `teams`, then rebuilds
    /// `leaderboard`.
    ///
    /// # Errors
    /// - [`LeagueError::UnknownTeam`] if a fixture names a team not in
    ///   `teams`, or [`LeagueError::SelfFixture`] if a fixture pairs a team
    ///   with itself. Both are checked before any fixture is applied.
    /// - [`LeagueError::Outcome`] if the provider fails; earlier fixtures
    ///   remain applied and the leaderboard is not rebuilt.
    pub fn run<P>(
        &self,
        schedule: &Schedule,
        teams: &mut [Team],
        leaderboard: &mut Leaderboard,
        provider: &mut P,
    ) -> Result<SimulationSummary>
    where
        P: OutcomeProvider + ?Sized,
    {
        let by_id: HashMap<TeamId, usize> =
            teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
        for fixture in schedule.fixtures() {
            if fixture.home == fixture.away {
                return Err(LeagueError::SelfFixture(fixture.home));
            }
            for id in [fixture.home, fixture.away] {
                if !by_id.contains_key(&id) {
                    return Err(LeagueError::UnknownTeam(id));
                }
            }
        }

        let index = match self.lookup {
            PlayerLookup::Indexed => Some(PlayerIndex::build(teams)),
            PlayerLookup::Scan => None,
        };

        info!(
            "simulating {} weeks, {} fixtures, {} teams",
            schedule.week_count(),
            schedule.fixture_count(),
            teams.len()
        );

        let mut summary = SimulationSummary::default();
        for week in schedule {
            for fixture in week {
                let home = by_id[&fixture.home];
                let away = by_id[&fixture.away];
                let outcome = provider
                    .simulate_game(&teams[home], &teams[away])
                    .map_err(LeagueError::Outcome)?;
                summary.dropped_events +=
                    self.apply(fixture, home, away, &outcome, teams, index.as_ref());
                summary.fixtures_played += 1;
            }
            summary.weeks_played += 1;
        }

        leaderboard.rebuild(teams);
        info!(
            "season complete: {} fixtures, {} dropped events",
            summary.fixtures_played, summary.dropped_events
        );
        Ok(summary)
    }

    /// Applies one outcome. Returns the number of dropped events.
    fn apply(
        &self,
        fixture: &Fixture,
        home: usize,
        away: usize,
        outcome: &MatchOutcome,
        teams: &mut [Team],
        index: Option<&PlayerIndex>,
    ) -> usize {
        for side in [home, away] {
            for player in teams[side].all_players_mut() {
                player.stats.increment(PlayerStat::GamesPlayed);
            }
        }

        let home_result = teams[home].record_game(outcome.home_goals, outcome.away_goals);
        teams[away].record_game(outcome.away_goals, outcome.home_goals);
        trace!(
            "{}: {}-{} ({})",
            fixture,
            outcome.home_goals,
            outcome.away_goals,
            home_result
        );

        let mut dropped = 0;
        for (stat, names) in outcome.events() {
            for name in names {
                let slot = match index {
                    Some(index) => index.get(name),
                    None => scan_for_player(teams, name),
                };
                let player = match slot {
                    Some((t, pos, i)) => teams[t].player_at_mut(pos, i),
                    None => None,
                };
                match player {
                    Some(player) => player.stats.increment(stat),
                    None => {
                        trace!("no player named {name:?}; {stat:?} event dropped");
                        dropped += 1;
                    }
                }
            }
        }
        dropped
    }
}
