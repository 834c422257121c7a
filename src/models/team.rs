//! Team model.
//!
//! A team carries its identity, a statistics record, a bounded recent-form
//! history, and a roster partitioned by [`PlayerPosition`].
//!
//! # Derived Statistics
//!
//! Games played, points, and goal difference are never stored independently
//! of their inputs: every write to wins, draws, losses, goals for, or goals
//! against recomputes them in the same call.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{GameResult, Player, PlayerPosition, PlayerStat, RecentForm, TeamId};
use crate::error::{LeagueError, Result};

/// Team statistic tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamStat {
    GamesPlayed,
    Points,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
}

impl TeamStat {
    /// All team statistics, in leaderboard column order.
    pub const ALL: [TeamStat; 8] = [
        TeamStat::GamesPlayed,
        TeamStat::Points,
        TeamStat::Wins,
        TeamStat::Draws,
        TeamStat::Losses,
        TeamStat::GoalsFor,
        TeamStat::GoalsAgainst,
        TeamStat::GoalDifference,
    ];

    /// Whether the value is computed from other statistics.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            TeamStat::GamesPlayed | TeamStat::Points | TeamStat::GoalDifference
        )
    }
}

/// Accumulated team statistics.
///
/// Deserialization reads only the primitive counters and recomputes the
/// derived ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PrimitiveTeamStats")]
pub struct TeamStats {
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    games_played: u64,
    points: i64,
    goal_difference: i64,
}

/// Serialized input form of [`TeamStats`].
#[derive(Deserialize)]
struct PrimitiveTeamStats {
    #[serde(default)]
    wins: u32,
    #[serde(default)]
    draws: u32,
    #[serde(default)]
    losses: u32,
    #[serde(default)]
    goals_for: u32,
    #[serde(default)]
    goals_against: u32,
}

impl From<PrimitiveTeamStats> for TeamStats {
    fn from(raw: PrimitiveTeamStats) -> Self {
        let mut stats = TeamStats {
            wins: raw.wins,
            draws: raw.draws,
            losses: raw.losses,
            goals_for: raw.goals_for,
            goals_against: raw.goals_against,
            ..TeamStats::default()
        };
        stats.recompute();
        stats
    }
}

impl TeamStats {
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn goal_difference(&self) -> i64 {
        self.goal_difference
    }

    /// Reads any statistic by tag.
    pub fn get(&self, stat: TeamStat) -> i64 {
        match stat {
            TeamStat::GamesPlayed => i64::try_from(self.games_played).unwrap_or(i64::MAX),
            TeamStat::Points => self.points,
            TeamStat::Wins => i64::from(self.wins),
            TeamStat::Draws => i64::from(self.draws),
            TeamStat::Losses => i64::from(self.losses),
            TeamStat::GoalsFor => i64::from(self.goals_for),
            TeamStat::GoalsAgainst => i64::from(self.goals_against),
            TeamStat::GoalDifference => self.goal_difference,
        }
    }

    /// Writes a primitive statistic and recomputes the derived ones.
    ///
    /// # Errors
    /// [`LeagueError::DerivedStatistic`] for games played, points, or goal
    /// difference.
    pub fn set(&mut self, stat: TeamStat, value: u32) -> Result<()> {
        match stat {
            TeamStat::Wins => self.wins = value,
            TeamStat::Draws => self.draws = value,
            TeamStat::Losses => self.losses = value,
            TeamStat::GoalsFor => self.goals_for = value,
            TeamStat::GoalsAgainst => self.goals_against = value,
            derived => return Err(LeagueError::DerivedStatistic(derived)),
        }
        self.recompute();
        Ok(())
    }

    /// Adds a score line to goals for/against.
    pub fn add_goals(&mut self, scored: u32, conceded: u32) {
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.recompute();
    }

    /// Counts one result.
    pub fn add_result(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins = self.wins.saturating_add(1),
            GameResult::Draw => self.draws = self.draws.saturating_add(1),
            GameResult::Loss => self.losses = self.losses.saturating_add(1),
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.games_played = u64::from(self.wins) + u64::from(self.draws) + u64::from(self.losses);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = GameResult::Win.points() * i64::from(self.wins)
            + GameResult::Draw.points() * i64::from(self.draws)
            + GameResult::Loss.points() * i64::from(self.losses);
    }
}

/// A team taking part in a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier.
    pub id: TeamId,
    /// Unique display name; final tie-breaker in the standings.
    pub name: String,
    stats: TeamStats,
    form: RecentForm,
    roster: [Vec<Player>; 4],
}

impl Team {
    /// Creates a team with an empty roster.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stats: TeamStats::default(),
            form: RecentForm::default(),
            roster: Default::default(),
        }
    }

    /// Adds players (builder style).
    pub fn with_players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        for player in players {
            self.add_player(player);
        }
        self
    }

    /// Sets the recent-form window, discarding any recorded form.
    pub fn with_form_window(mut self, window: usize) -> Self {
        self.set_form_window(window);
        self
    }

    pub(crate) fn set_form_window(&mut self, window: usize) {
        if self.form.window() != window {
            self.form = RecentForm::new(window);
        }
    }

    // ---- roster ----

    /// Appends a player to the list for their position.
    pub fn add_player(&mut self, player: Player) {
        self.roster[player.position.slot()].push(player);
    }

    /// Removes the first player with this name and position.
    pub fn remove_player(&mut self, name: &str, position: PlayerPosition) -> Option<Player> {
        let list = &mut self.roster[position.slot()];
        let idx = list.iter().position(|p| p.name == name)?;
        Some(list.remove(idx))
    }

    /// Players in one position, or all players when `position` is `None`.
    ///
    /// Returns `None` if nothing matches.
    pub fn players(&self, position: Option<PlayerPosition>) -> Option<Vec<&Player>> {
        let found: Vec<&Player> = match position {
            Some(pos) => self.roster[pos.slot()].iter().collect(),
            None => self.all_players().collect(),
        };
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Every player, in position order then insertion order.
    pub fn all_players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter().flatten()
    }

    pub fn all_players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.roster.iter_mut().flatten()
    }

    /// First player with the given name.
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.all_players().find(|p| p.name == name)
    }

    pub fn find_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.all_players_mut().find(|p| p.name == name)
    }

    /// Mutable access by roster coordinates.
    pub(crate) fn player_at_mut(
        &mut self,
        position: PlayerPosition,
        index: usize,
    ) -> Option<&mut Player> {
        self.roster[position.slot()].get_mut(index)
    }

    /// Roster coordinates of every player, in iteration order.
    pub(crate) fn roster_slots(&self) -> impl Iterator<Item = (PlayerPosition, usize, &str)> {
        PlayerPosition::ALL.into_iter().flat_map(move |pos| {
            self.roster[pos.slot()]
                .iter()
                .enumerate()
                .map(move |(i, p)| (pos, i, p.name.as_str()))
        })
    }

    /// Total number of players.
    pub fn player_count(&self) -> usize {
        self.roster.iter().map(Vec::len).sum()
    }

    /// Top `n` players by `stat`, highest first; equal values ordered by name.
    pub fn top_players(&self, stat: PlayerStat, n: usize) -> Vec<(u32, &Player)> {
        let mut ranked: Vec<(u32, &Player)> =
            self.all_players().map(|p| (p.stat(stat), p)).collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));
        ranked.truncate(n);
        ranked
    }

    // ---- statistics ----

    pub fn stats(&self) -> &TeamStats {
        &self.stats
    }

    /// Reads a statistic by tag.
    pub fn stat(&self, stat: TeamStat) -> i64 {
        self.stats.get(stat)
    }

    /// Writes a primitive statistic; see [`TeamStats::set`].
    pub fn set_stat(&mut self, stat: TeamStat, value: u32) -> Result<()> {
        self.stats.set(stat, value)
    }

    /// Applies one finished game: goals first, then the result and its
    /// recent-form entry.
    pub fn record_game(&mut self, scored: u32, conceded: u32) -> GameResult {
        self.stats.add_goals(scored, conceded);
        let result = GameResult::from_score(scored, conceded);
        self.stats.add_result(result);
        self.form.record(result);
        result
    }

    pub fn form(&self) -> &RecentForm {
        &self.form
    }

    /// Recent results oldest-first, or `None` before the first game.
    pub fn last_results(&self) -> Option<Vec<GameResult>> {
        self.form.last_results()
    }

    /// Restores statistics and form to their initial state.
    ///
    /// Player statistics are left untouched.
    pub fn reset_stats(&mut self) {
        self.stats = TeamStats::default();
        self.form.clear();
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {} (Number: {})", self.name, self.id)
    }
}
