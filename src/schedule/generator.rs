//! Round-robin schedule generation.
//!
//! # Algorithm
//!
//! 1. Enumerate every unordered pair `(i, j)`, `i < j`, in lexicographic
//!    order over the input team order. Team `i` is home.
//! 2. Scan the remaining pair pool in order; accept a pair into the current
//!    week when neither team is already used that week.
//! 3. When a scan finishes, close the week (even if it is short) and repeat
//!    with whatever is left until the pool is empty.
//! 4. Append the home/away mirror of every first-half week, in the same
//!    order, to form the second half.
//!
//! This is first-fit packing, not an optimal round-robin construction. For
//! odd team counts some weeks carry fewer than `N / 2` games and the teams
//! left out have a bye.
//!
//! # Complexity
//! O(W * P) where W = weeks produced and P = N(N-1)/2 pairs.

use std::collections::HashSet;

use log::debug;

use crate::models::{Fixture, TeamId, Week};

/// Every unordered pair of `teams` exactly once, in `(i, j)` order with
/// `i < j`. The earlier team is home.
///
/// # Example
/// ```
/// use u_league::models::TeamId;
/// use u_league::schedule::generate_pairs;
///
/// let pairs = generate_pairs(&[TeamId(1), TeamId(2), TeamId(3)]);
/// assert_eq!(pairs.len(), 3);
/// assert_eq!((pairs[0].home, pairs[0].away), (TeamId(1), TeamId(2)));
/// ```
pub fn generate_pairs(teams: &[TeamId]) -> Vec<Fixture> {
    let n = teams.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push(Fixture::new(teams[i], teams[j]));
        }
    }
    pairs
}

/// Greedy first-fit partitioning of fixtures into conflict-free weeks.
#[derive(Debug, Clone, Default)]
pub struct WeekPacker;

impl WeekPacker {
    pub fn new() -> Self {
        Self
    }

    /// Packs `pool` into weeks, preserving pool order within each week.
    ///
    /// Every fixture lands in exactly one week; no week repeats a team.
    pub fn pack(&self, pool: Vec<Fixture>) -> Vec<Week> {
        let mut remaining = pool;
        let mut weeks = Vec::new();

        while !remaining.is_empty() {
            let mut used: HashSet<TeamId> = HashSet::new();
            let mut games = Vec::new();
            let mut leftover = Vec::with_capacity(remaining.len());

            for fixture in remaining {
                if !used.contains(&fixture.home) && !used.contains(&fixture.away) {
                    used.insert(fixture.home);
                    used.insert(fixture.away);
                    games.push(fixture);
                } else {
                    leftover.push(fixture);
                }
            }

            debug!(
                "packed week {} with {} games ({} pairs left)",
                weeks.len() + 1,
                games.len(),
                leftover.len()
            );
            weeks.push(Week::new(games));
            remaining = leftover;
        }

        weeks
    }
}

/// Builds the doubled round-robin: packed first half, then its mirror.
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    packer: WeekPacker,
}

impl ScheduleGenerator {
    pub fn new() -> Self {
        Self {
            packer: WeekPacker::new(),
        }
    }

    /// First-half weeks exactly as packed.
    pub fn first_half(&self, teams: &[TeamId]) -> Vec<Week> {
        self.packer.pack(generate_pairs(teams))
    }

    /// Full season: first half followed by every first-half week mirrored.
    pub fn generate(&self, teams: &[TeamId]) -> Vec<Week> {
        let first = self.first_half(teams);
        let mut weeks = Vec::with_capacity(first.len() * 2);
        let mirrored: Vec<Week> = first.iter().map(Week::mirrored).collect();
        weeks.extend(first);
        weeks.extend(mirrored);
        weeks
    }
}
