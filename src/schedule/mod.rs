//! Season schedule: generation, relocation of weeks, and fixture iteration.
//!
//! # Week Numbering
//!
//! Public operations take 1-based week numbers, matching how a season
//! calendar is read ("week 1" is the opening week).

mod generator;

pub use generator::{generate_pairs, ScheduleGenerator, WeekPacker};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};
use crate::models::{Fixture, TeamId, Week};

/// Ordered sequence of weeks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    weeks: Vec<Week>,
}

impl Schedule {
    /// Wraps an existing week list.
    pub fn new(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// Generates the doubled round-robin for `teams` in the given order.
    pub fn round_robin(teams: &[TeamId]) -> Self {
        Self::new(ScheduleGenerator::new().generate(teams))
    }

    /// Number of weeks.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Total fixtures across all weeks.
    pub fn fixture_count(&self) -> usize {
        self.weeks.iter().map(Week::len).sum()
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Week by 1-based number.
    pub fn week(&self, number: usize) -> Option<&Week> {
        number.checked_sub(1).and_then(|i| self.weeks.get(i))
    }

    /// Every fixture in current week order, then in-week order.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> + '_ {
        self.weeks.iter().flat_map(|w| w.games.iter())
    }

    /// Teams from `teams` that do not play in week `number`.
    ///
    /// Empty for a full week; with an odd team count at least one team sits
    /// out every week.
    pub fn byes(&self, number: usize, teams: &[TeamId]) -> Result<Vec<TeamId>> {
        let week = self.week(number).ok_or(LeagueError::WeekOutOfRange {
            week: number,
            weeks: self.weeks.len(),
        })?;
        Ok(teams
            .iter()
            .copied()
            .filter(|t| !week.involves(*t))
            .collect())
    }

    /// Moves week `origin` to slot `target`, or to the end when `target` is
    /// `None`. Weeks in between shift by one slot; fixtures are untouched.
    ///
    /// # Errors
    /// [`LeagueError::WeekOutOfRange`] if either number is outside
    /// `[1, week_count]`. The schedule is unchanged on error.
    ///
    /// # Example
    /// ```
    /// use u_league::models::TeamId;
    /// use u_league::schedule::Schedule;
    ///
    /// let teams = [TeamId(1), TeamId(2), TeamId(3), TeamId(4)];
    /// let mut schedule = Schedule::round_robin(&teams);
    /// let opener = schedule.week(1).cloned().unwrap();
    ///
    /// schedule.delay(1, None).unwrap();
    /// assert_eq!(schedule.week(6), Some(&opener));
    /// ```
    pub fn delay(&mut self, origin: usize, target: Option<usize>) -> Result<()> {
        let weeks = self.weeks.len();
        let check = |week: usize| {
            if week == 0 || week > weeks {
                Err(LeagueError::WeekOutOfRange { week, weeks })
            } else {
                Ok(())
            }
        };
        check(origin)?;
        if let Some(t) = target {
            check(t)?;
        }

        let moved = self.weeks.remove(origin - 1);
        match target {
            Some(t) => self.weeks.insert(t - 1, moved),
            None => self.weeks.push(moved),
        }

        debug!(
            "moved week {} to {}",
            origin,
            target.map_or_else(|| format!("end ({weeks})"), |t| t.to_string())
        );
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Week;
    type IntoIter = std::slice::Iter<'a, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(n: usize) -> Schedule {
        // Week k holds a single fixture (k, k+100) so weeks are distinguishable.
        Schedule::new(
            (1..=n as u32)
                .map(|k| Week::new(vec![Fixture::new(TeamId(k), TeamId(k + 100))]))
                .collect(),
        )
    }

    fn order(s: &Schedule) -> Vec<u32> {
        s.weeks().iter().map(|w| w.games[0].home.get()).collect()
    }

    #[test]
    fn test_delay_to_end() {
        let mut s = labelled(6);
        s.delay(2, None).unwrap();
        assert_eq!(order(&s), vec![1, 3, 4, 5, 6, 2]);
    }

    #[test]
    fn test_delay_forward() {
        let mut s = labelled(6);
        s.delay(2, Some(5)).unwrap();
        assert_eq!(order(&s), vec![1, 3, 4, 5, 2, 6]);
    }

    #[test]
    fn test_delay_backward() {
        let mut s = labelled(6);
        s.delay(5, Some(2)).unwrap();
        assert_eq!(order(&s), vec![1, 5, 2, 3, 4, 6]);
    }

    #[test]
    fn test_delay_same_slot_is_noop() {
        let mut s = labelled(4);
        s.delay(3, Some(3)).unwrap();
        assert_eq!(order(&s), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_delay_last_to_end_is_noop() {
        let mut s = labelled(4);
        s.delay(4, None).unwrap();
        assert_eq!(order(&s), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_delay_out_of_range_leaves_schedule() {
        let mut s = labelled(4);
        let before = s.clone();

        assert!(matches!(
            s.delay(0, None),
            Err(LeagueError::WeekOutOfRange { week: 0, weeks: 4 })
        ));
        assert!(matches!(
            s.delay(5, None),
            Err(LeagueError::WeekOutOfRange { week: 5, .. })
        ));
        assert!(matches!(
            s.delay(2, Some(9)),
            Err(LeagueError::WeekOutOfRange { week: 9, .. })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn test_delay_preserves_multiset() {
        let teams: Vec<TeamId> = (1..=6).map(TeamId).collect();
        let mut s = Schedule::round_robin(&teams);
        let mut before: Vec<Week> = s.weeks().to_vec();
        let moved = s.week(3).cloned().unwrap();

        s.delay(3, Some(8)).unwrap();
        assert_eq!(s.week(8), Some(&moved));

        let mut after: Vec<Week> = s.weeks().to_vec();
        let key = |w: &Week| format!("{:?}", w.games);
        before.sort_by_key(key);
        after.sort_by_key(key);
        assert_eq!(before, after);
    }

    #[test]
    fn test_fixtures_follow_current_order() {
        let mut s = labelled(3);
        s.delay(1, None).unwrap();
        let homes: Vec<u32> = s.fixtures().map(|f| f.home.get()).collect();
        assert_eq!(homes, vec![2, 3, 1]);
        assert_eq!(s.fixture_count(), 3);
    }

    #[test]
    fn test_byes_for_odd_count() {
        let teams: Vec<TeamId> = (1..=5).map(TeamId).collect();
        let s = Schedule::round_robin(&teams);
        for number in 1..=s.week_count() {
            let byes = s.byes(number, &teams).unwrap();
            assert!(!byes.is_empty());
        }
        assert!(s.byes(0, &teams).is_err());
    }

    #[test]
    fn test_week_accessor() {
        let s = labelled(2);
        assert!(s.week(0).is_none());
        assert!(s.week(3).is_none());
        assert_eq!(s.week(1).unwrap().games[0].home, TeamId(1));
    }
}
