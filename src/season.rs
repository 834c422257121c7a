//! Season facade.
//!
//! Owns the teams, generates the schedule once at construction, keeps the
//! leaderboard, and runs simulation passes.
//!
//! # Example
//! ```
//! use u_league::models::{Player, PlayerPosition, Team, TeamIdAllocator};
//! use u_league::simulation::RandomOutcomeProvider;
//! use u_league::Season;
//!
//! let mut ids = TeamIdAllocator::new();
//! let teams: Vec<Team> = ["Ajax", "Benfica", "Celtic", "Dortmund"]
//!     .into_iter()
//!     .map(|name| {
//!         Team::new(ids.next_id(), name)
//!             .with_players(vec![Player::new(format!("{name} 9"), PlayerPosition::Forward)])
//!     })
//!     .collect();
//!
//! let mut season = Season::new(teams).unwrap();
//! assert_eq!(season.schedule().week_count(), 6);
//!
//! season.delay_week_of_games(1, None).unwrap();
//! season.simulate(&mut RandomOutcomeProvider::seeded(2024)).unwrap();
//!
//! let table = season.leaderboard();
//! assert_eq!(table.len(), 4);
//! assert!(table.iter().all(|row| row.games_played == 6));
//! ```

use log::{info, warn};

use crate::config::SeasonConfig;
use crate::error::{LeagueError, Result};
use crate::leaderboard::{Leaderboard, LeaderboardRow};
use crate::models::{Fixture, Team, TeamId, Week};
use crate::schedule::Schedule;
use crate::simulation::{OutcomeProvider, SeasonSimulator, SimulationSummary};
use crate::validation::validate_teams;

/// A round-robin season over a fixed set of teams.
#[derive(Debug, Clone)]
pub struct Season {
    teams: Vec<Team>,
    schedule: Schedule,
    leaderboard: Leaderboard,
    config: SeasonConfig,
}

impl Season {
    /// Creates a season with the default configuration.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        Self::with_config(teams, SeasonConfig::default())
    }

    /// Creates a season, generating its schedule and initial leaderboard.
    ///
    /// # Errors
    /// - [`LeagueError::InvalidConfig`] if `config` fails validation.
    /// - [`LeagueError::DuplicateTeamId`] if two teams share an id.
    ///
    /// Duplicate names and fewer than two teams are logged, not rejected.
    pub fn with_config(mut teams: Vec<Team>, config: SeasonConfig) -> Result<Self> {
        config.validate()?;

        if let Err(problems) = validate_teams(&teams) {
            for problem in &problems {
                if problem.is_fatal() {
                    if let Some(id) = first_duplicate_id(&teams) {
                        return Err(LeagueError::DuplicateTeamId(id));
                    }
                }
                warn!("{}", problem.message);
            }
        }

        for team in &mut teams {
            team.set_form_window(config.form_window);
        }

        let ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
        let schedule = Schedule::round_robin(&ids);
        let leaderboard = Leaderboard::build(&teams);

        info!(
            "season created: {} teams, {} weeks, {} fixtures",
            teams.len(),
            schedule.week_count(),
            schedule.fixture_count()
        );

        Ok(Self {
            teams,
            schedule,
            leaderboard,
            config,
        })
    }

    /// Plays the whole schedule in its current order, then rebuilds the
    /// leaderboard. See [`SeasonSimulator::run`].
    pub fn simulate<P>(&mut self, provider: &mut P) -> Result<SimulationSummary>
    where
        P: OutcomeProvider + ?Sized,
    {
        SeasonSimulator::new(self.config.player_lookup).run(
            &self.schedule,
            &mut self.teams,
            &mut self.leaderboard,
            provider,
        )
    }

    /// Moves week `orig_week` to `new_week`, or to the end when `None`.
    /// Both are 1-based. See [`Schedule::delay`].
    pub fn delay_week_of_games(&mut self, orig_week: usize, new_week: Option<usize>) -> Result<()> {
        self.schedule.delay(orig_week, new_week)
    }

    /// Fixtures in current schedule order.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> + '_ {
        self.schedule.fixtures()
    }

    /// Fixtures resolved to `(home, away)` teams, in current schedule order.
    pub fn games(&self) -> impl Iterator<Item = (&Team, &Team)> + '_ {
        self.fixtures()
            .filter_map(move |f| Some((self.team(f.home)?, self.team(f.away)?)))
    }

    /// Standings export, best first.
    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        self.leaderboard.rows(&self.teams)
    }

    /// Teams best first.
    pub fn standings(&self) -> impl Iterator<Item = &Team> + '_ {
        self.leaderboard.ranked(&self.teams)
    }

    /// Re-sorts the leaderboard from current statistics.
    pub fn refresh_leaderboard(&mut self) {
        self.leaderboard.rebuild(&self.teams);
    }

    /// Resets every team's statistics and form, and every player's
    /// statistics, then re-sorts the leaderboard.
    pub fn reset_stats(&mut self) {
        for team in &mut self.teams {
            team.reset_stats();
            for player in team.all_players_mut() {
                player.reset_stats();
            }
        }
        self.leaderboard.rebuild(&self.teams);
    }

    /// Teams in construction order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Mutable team access for roster changes.
    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Week `number`, 1-based, in current schedule order.
    pub fn week(&self, number: usize) -> Option<&Week> {
        self.schedule.week(number)
    }

    /// Teams idle in week `number`, 1-based.
    pub fn byes(&self, number: usize) -> Result<Vec<TeamId>> {
        let ids: Vec<TeamId> = self.teams.iter().map(|t| t.id).collect();
        self.schedule.byes(number, &ids)
    }

    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

fn first_duplicate_id(teams: &[Team]) -> Option<TeamId> {
    let mut seen = std::collections::HashSet::new();
    teams.iter().map(|t| t.id).find(|id| !seen.insert(*id))
}
