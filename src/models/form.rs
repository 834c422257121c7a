//! Match results and bounded recent-form history.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Default number of results kept in a team's recent form.
pub const DEFAULT_FORM_WINDOW: usize = 5;

/// Result of a single game from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// League points awarded for this result.
    pub fn points(self) -> i64 {
        match self {
            GameResult::Win => 3,
            GameResult::Draw => 1,
            GameResult::Loss => 0,
        }
    }

    /// The result seen from the opponent's side.
    pub fn opposite(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Draw => GameResult::Draw,
            GameResult::Loss => GameResult::Win,
        }
    }

    /// Classifies a score line from the first side's perspective.
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::Loss,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::Win => "WIN",
            GameResult::Draw => "DRAW",
            GameResult::Loss => "LOSS",
        };
        f.write_str(s)
    }
}

/// Bounded, oldest-first history of results.
///
/// Once full, recording a result evicts the oldest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentForm {
    window: usize,
    results: VecDeque<GameResult>,
}

impl RecentForm {
    /// Creates an empty history holding at most `window` results (minimum 1).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            results: VecDeque::with_capacity(window),
        }
    }

    /// Appends a result, evicting the oldest if the window is full.
    pub fn record(&mut self, result: GameResult) {
        if self.results.len() >= self.window {
            self.results.pop_front();
        }
        self.results.push_back(result);
    }

    /// Recorded results, oldest first, or `None` if nothing was recorded.
    pub fn last_results(&self) -> Option<Vec<GameResult>> {
        if self.results.is_empty() {
            None
        } else {
            Some(self.results.iter().copied().collect())
        }
    }

    /// Iterates oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = GameResult> + '_ {
        self.results.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Maximum number of results retained.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Forgets all results.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl Default for RecentForm {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_is_none() {
        let form = RecentForm::default();
        assert!(form.last_results().is_none());
        assert_eq!(form.window(), 5);
    }

    #[test]
    fn test_form_evicts_oldest() {
        let mut form = RecentForm::default();
        form.record(GameResult::Loss);
        for _ in 0..4 {
            form.record(GameResult::Win);
        }
        form.record(GameResult::Draw);

        let results = form.last_results().unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(
            results,
            vec![
                GameResult::Win,
                GameResult::Win,
                GameResult::Win,
                GameResult::Win,
                GameResult::Draw
            ]
        );
    }

    #[test]
    fn test_partial_form_keeps_order() {
        let mut form = RecentForm::default();
        form.record(GameResult::Win);
        form.record(GameResult::Loss);
        form.record(GameResult::Loss);
        form.record(GameResult::Draw);
        assert_eq!(
            form.last_results(),
            Some(vec![
                GameResult::Win,
                GameResult::Loss,
                GameResult::Loss,
                GameResult::Draw
            ])
        );
    }

    #[test]
    fn test_zero_window_clamped() {
        let mut form = RecentForm::new(0);
        form.record(GameResult::Win);
        form.record(GameResult::Draw);
        assert_eq!(form.last_results(), Some(vec![GameResult::Draw]));
    }

    #[test]
    fn test_result_from_score() {
        assert_eq!(GameResult::from_score(2, 1), GameResult::Win);
        assert_eq!(GameResult::from_score(0, 3), GameResult::Loss);
        assert_eq!(GameResult::from_score(1, 1), GameResult::Draw);
        assert_eq!(GameResult::Win.opposite(), GameResult::Loss);
        assert_eq!(GameResult::Win.to_string(), "WIN");
    }
}
