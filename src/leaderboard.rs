//! League standings.
//!
//! # Ranking
//!
//! Teams are compared by, in order:
//!
//! | Key | Direction |
//! |-----|-----------|
//! | Points | higher first |
//! | Goal difference | higher first |
//! | Goals for | higher first |
//! | Name | lexicographically smaller first |
//!
//! With unique names this is a strict total order. Duplicate names fall
//! back to input order, which is deterministic but not meaningful.
//!
//! The leaderboard holds positions into the season's team list rather than
//! owning teams; it is built once with ordered insertion and rebuilt after
//! every simulation pass.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{GameResult, Team, TeamId};

/// Ranking comparator. `Less` means `a` ranks above `b`.
pub fn compare_teams(a: &Team, b: &Team) -> Ordering {
    let (sa, sb) = (a.stats(), b.stats());
    sb.points()
        .cmp(&sa.points())
        .then_with(|| sb.goal_difference().cmp(&sa.goal_difference()))
        .then_with(|| sb.goals_for().cmp(&sa.goals_for()))
        .then_with(|| a.name.cmp(&b.name))
}

/// One exported standings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub games_played: u64,
    pub points: i64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    /// Oldest-first recent results; `None` before the first game.
    pub last_five: Option<Vec<GameResult>>,
}

impl LeaderboardRow {
    pub fn from_team(team: &Team) -> Self {
        let s = team.stats();
        Self {
            name: team.name.clone(),
            games_played: s.games_played(),
            points: s.points(),
            wins: s.wins(),
            draws: s.draws(),
            losses: s.losses(),
            goals_for: s.goals_for(),
            goals_against: s.goals_against(),
            goal_difference: s.goal_difference(),
            last_five: team.last_results(),
        }
    }
}

/// Ordered view over a team list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    order: Vec<usize>,
}

impl Leaderboard {
    /// Builds by inserting each team, in input order, before the first
    /// entry it outranks (or at the end).
    pub fn build(teams: &[Team]) -> Self {
        let mut order: Vec<usize> = Vec::with_capacity(teams.len());
        for (idx, team) in teams.iter().enumerate() {
            let slot = order
                .iter()
                .position(|&other| compare_teams(team, &teams[other]) == Ordering::Less);
            match slot {
                Some(pos) => order.insert(pos, idx),
                None => order.push(idx),
            }
        }
        Self { order }
    }

    /// Replaces the order with a fresh stable sort of all teams.
    pub fn rebuild(&mut self, teams: &[Team]) {
        let mut order: Vec<usize> = (0..teams.len()).collect();
        order.sort_by(|&a, &b| compare_teams(&teams[a], &teams[b]));
        self.order = order;
    }

    /// Positions into the team list, best first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Teams best first.
    pub fn ranked<'a>(&'a self, teams: &'a [Team]) -> impl Iterator<Item = &'a Team> + 'a {
        self.order.iter().filter_map(move |&i| teams.get(i))
    }

    /// 1-based standing of a team.
    pub fn position_of(&self, id: TeamId, teams: &[Team]) -> Option<usize> {
        self.ranked(teams).position(|t| t.id == id).map(|p| p + 1)
    }

    /// Whether every adjacent pair satisfies the comparator.
    pub fn is_sorted(&self, teams: &[Team]) -> bool {
        let ranked: Vec<&Team> = self.ranked(teams).collect();
        ranked
            .windows(2)
            .all(|w| compare_teams(w[0], w[1]) != Ordering::Greater)
    }

    /// Exported rows, best first.
    pub fn rows(&self, teams: &[Team]) -> Vec<LeaderboardRow> {
        self.ranked(teams).map(LeaderboardRow::from_team).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamStat;

    fn team(id: u32, name: &str) -> Team {
        Team::new(TeamId(id), name)
    }

    fn names(board: &Leaderboard, teams: &[Team]) -> Vec<String> {
        board.ranked(teams).map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_initial_order_by_name() {
        let teams = vec![team(1, "Delta"), team(2, "Alpha"), team(3, "Charlie"), team(4, "Bravo")];
        let board = Leaderboard::build(&teams);
        assert_eq!(names(&board, &teams), vec!["Alpha", "Bravo", "Charlie", "Delta"]);
        assert!(board.is_sorted(&teams));
    }

    #[test]
    fn test_points_then_difference_then_goals() {
        let mut teams = vec![team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D")];
        // A: 3 pts, +1
        teams[0].record_game(2, 1);
        // B: 3 pts, +3
        teams[1].record_game(3, 0);
        // C: 3 pts, +3, more goals
        teams[2].record_game(4, 1);
        // D: 1 pt
        teams[3].record_game(5, 5);

        let mut board = Leaderboard::build(&teams);
        board.rebuild(&teams);
        assert_eq!(names(&board, &teams), vec!["C", "B", "A", "D"]);
        assert_eq!(board.position_of(TeamId(1), &teams), Some(3));
    }

    #[test]
    fn test_build_matches_rebuild() {
        let mut teams = vec![team(1, "Lions"), team(2, "Bears"), team(3, "Owls")];
        teams[2].set_stat(TeamStat::Wins, 2).unwrap();
        teams[0].set_stat(TeamStat::Draws, 1).unwrap();

        let built = Leaderboard::build(&teams);
        let mut rebuilt = Leaderboard::default();
        rebuilt.rebuild(&teams);
        assert_eq!(built, rebuilt);
        assert_eq!(names(&built, &teams), vec!["Owls", "Lions", "Bears"]);
    }

    #[test]
    fn test_rebuild_idempotent() {
        let mut teams = vec![team(1, "X"), team(2, "Y"), team(3, "Z")];
        teams[1].record_game(1, 0);
        let mut board = Leaderboard::build(&teams);
        board.rebuild(&teams);
        let first = board.clone();
        board.rebuild(&teams);
        assert_eq!(board, first);
    }

    #[test]
    fn test_duplicate_names_do_not_panic() {
        let teams = vec![team(1, "Same"), team(2, "Same")];
        let mut board = Leaderboard::build(&teams);
        board.rebuild(&teams);
        assert_eq!(board.order(), &[0, 1]);
    }

    #[test]
    fn test_rows_export() {
        let mut teams = vec![team(1, "Home"), team(2, "Away")];
        teams[0].record_game(2, 1);
        teams[1].record_game(1, 2);
        let mut board = Leaderboard::build(&teams);
        board.rebuild(&teams);

        let rows = board.rows(&teams);
        assert_eq!(rows[0].name, "Home");
        assert_eq!(rows[0].points, 3);
        assert_eq!(rows[0].last_five, Some(vec![GameResult::Win]));
        assert_eq!(rows[1].goal_difference, -1);

        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json["last_five"], serde_json::json!(["LOSS"]));
        assert_eq!(json["goals_against"], 2);
    }

    #[test]
    fn test_rows_no_history_is_null() {
        let teams = vec![team(1, "Fresh")];
        let rows = Leaderboard::build(&teams).rows(&teams);
        assert!(rows[0].last_five.is_none());
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert!(json["last_five"].is_null());
    }
}
