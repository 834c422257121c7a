//! Seeded random outcome provider.
//!
//! Draws each side's goals uniformly from `0..=max_goals` and attributes
//! events to random members of the side's roster. Deterministic for a given
//! seed and schedule.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::{MatchOutcome, OutcomeProvider};
use crate::error::BoxError;
use crate::models::{Player, Team};

/// Random match outcomes for demos and soak tests.
#[derive(Debug, Clone)]
pub struct RandomOutcomeProvider {
    rng: StdRng,
    /// Upper bound on goals per side.
    pub max_goals: u32,
    /// Upper bound on tackles and on interceptions per side.
    pub max_defensive_events: u32,
    /// Chance that a goal has an assist.
    pub assist_probability: f64,
}

impl RandomOutcomeProvider {
    /// Creates a provider from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_goals: 4,
            max_defensive_events: 3,
            assist_probability: 0.6,
        }
    }

    pub fn with_max_goals(mut self, max_goals: u32) -> Self {
        self.max_goals = max_goals;
        self
    }

    pub fn with_max_defensive_events(mut self, max: u32) -> Self {
        self.max_defensive_events = max;
        self
    }

    pub fn with_assist_probability(mut self, p: f64) -> Self {
        self.assist_probability = p.clamp(0.0, 1.0);
        self
    }

    fn side_events(&mut self, team: &Team, goals: u32, outcome: &mut MatchOutcome) {
        let squad: Vec<&Player> = team.all_players().collect();
        if squad.is_empty() {
            return;
        }

        for _ in 0..goals {
            if let Some(scorer) = squad.choose(&mut self.rng) {
                outcome.goal_scorers.push(scorer.name.clone());
            }
            if squad.len() > 1 && self.rng.random_bool(self.assist_probability) {
                if let Some(assist) = squad.choose(&mut self.rng) {
                    outcome.goal_assists.push(assist.name.clone());
                }
            }
        }

        let tackles = self.rng.random_range(0..=self.max_defensive_events);
        for _ in 0..tackles {
            if let Some(p) = squad.choose(&mut self.rng) {
                outcome.tackles.push(p.name.clone());
            }
        }
        let interceptions = self.rng.random_range(0..=self.max_defensive_events);
        for _ in 0..interceptions {
            if let Some(p) = squad.choose(&mut self.rng) {
                outcome.interceptions.push(p.name.clone());
            }
        }
    }
}

impl OutcomeProvider for RandomOutcomeProvider {
    fn simulate_game(
        &mut self,
        home: &Team,
        away: &Team,
    ) -> std::result::Result<MatchOutcome, BoxError> {
        let home_goals = self.rng.random_range(0..=self.max_goals);
        let away_goals = self.rng.random_range(0..=self.max_goals);
        let mut outcome = MatchOutcome::score(home_goals, away_goals);
        self.side_events(home, home_goals, &mut outcome);
        self.side_events(away, away_goals, &mut outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerPosition, TeamId};

    fn team(id: u32, prefix: &str) -> Team {
        Team::new(TeamId(id), prefix).with_players(
            (0..5).map(|i| Player::new(format!("{prefix}{i}"), PlayerPosition::Midfielder)),
        )
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let (h, a) = (team(1, "H"), team(2, "A"));
        let mut p1 = RandomOutcomeProvider::seeded(42);
        let mut p2 = RandomOutcomeProvider::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                p1.simulate_game(&h, &a).unwrap(),
                p2.simulate_game(&h, &a).unwrap()
            );
        }
    }

    #[test]
    fn test_goals_within_bounds_and_attributed() {
        let (h, a) = (team(1, "H"), team(2, "A"));
        let mut provider = RandomOutcomeProvider::seeded(7).with_max_goals(3);
        for _ in 0..50 {
            let o = provider.simulate_game(&h, &a).unwrap();
            assert!(o.home_goals <= 3 && o.away_goals <= 3);
            assert_eq!(o.goal_scorers.len() as u32, o.home_goals + o.away_goals);
            assert!(o.goal_assists.len() <= o.goal_scorers.len());
        }
    }

    #[test]
    fn test_empty_roster_has_no_events() {
        let (h, a) = (Team::new(TeamId(1), "H"), Team::new(TeamId(2), "A"));
        let mut provider = RandomOutcomeProvider::seeded(1);
        let o = provider.simulate_game(&h, &a).unwrap();
        assert!(o.goal_scorers.is_empty());
        assert!(o.tackles.is_empty());
    }
}
