//! Fixture and week models.
//!
//! A fixture is an ordered (home, away) pairing. A week is a batch of
//! fixtures in which no team appears twice.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TeamId;
use crate::error::LeagueError;

/// A scheduled game between two distinct teams.
///
/// Deserialization rejects a fixture whose home and away teams are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FixtureSides")]
pub struct Fixture {
    /// Home team.
    pub home: TeamId,
    /// Away team.
    pub away: TeamId,
}

#[derive(Deserialize)]
struct FixtureSides {
    home: TeamId,
    away: TeamId,
}

impl TryFrom<FixtureSides> for Fixture {
    type Error = LeagueError;

    fn try_from(sides: FixtureSides) -> Result<Self, Self::Error> {
        if sides.home == sides.away {
            return Err(LeagueError::SelfFixture(sides.home));
        }
        Ok(Self {
            home: sides.home,
            away: sides.away,
        })
    }
}

impl Fixture {
    /// Creates a fixture.
    pub fn new(home: TeamId, away: TeamId) -> Self {
        debug_assert_ne!(home, away, "a fixture needs two distinct teams");
        Self { home, away }
    }

    /// Same pairing with home and away swapped.
    pub fn reversed(&self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }

    /// Whether `team` plays in this fixture.
    #[inline]
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// Orientation-independent key `(min, max)`.
    pub fn pair_key(&self) -> (TeamId, TeamId) {
        if self.home <= self.away {
            (self.home, self.away)
        } else {
            (self.away, self.home)
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// One week of fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Fixtures in play order.
    pub games: Vec<Fixture>,
}

impl Week {
    pub fn new(games: Vec<Fixture>) -> Self {
        Self { games }
    }

    /// The same week with every fixture's home/away swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            games: self.games.iter().map(Fixture::reversed).collect(),
        }
    }

    /// Whether `team` plays this week.
    pub fn involves(&self, team: TeamId) -> bool {
        self.games.iter().any(|g| g.involves(team))
    }

    /// Whether no team appears in more than one fixture.
    pub fn is_conflict_free(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.games
            .iter()
            .all(|g| seen.insert(g.home) && seen.insert(g.away))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.games.iter()
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_reversed() {
        let f = Fixture::new(TeamId(1), TeamId(2));
        let r = f.reversed();
        assert_eq!(r.home, TeamId(2));
        assert_eq!(r.away, TeamId(1));
        assert_eq!(f.pair_key(), r.pair_key());
        assert_eq!(f.to_string(), "1 vs 2");
    }

    #[test]
    fn test_week_mirrored_keeps_order() {
        let week = Week::new(vec![
            Fixture::new(TeamId(1), TeamId(2)),
            Fixture::new(TeamId(3), TeamId(4)),
        ]);
        let mirrored = week.mirrored();
        assert_eq!(
            mirrored.games,
            vec![
                Fixture::new(TeamId(2), TeamId(1)),
                Fixture::new(TeamId(4), TeamId(3)),
            ]
        );
    }

    #[test]
    fn test_week_conflicts() {
        let ok = Week::new(vec![
            Fixture::new(TeamId(1), TeamId(2)),
            Fixture::new(TeamId(3), TeamId(4)),
        ]);
        assert!(ok.is_conflict_free());
        assert!(ok.involves(TeamId(3)));
        assert!(!ok.involves(TeamId(5)));

        let clash = Week::new(vec![
            Fixture::new(TeamId(1), TeamId(2)),
            Fixture::new(TeamId(2), TeamId(3)),
        ]);
        assert!(!clash.is_conflict_free());
    }

    #[test]
    fn test_deserialize_rejects_self_fixture() {
        let ok: Fixture = serde_json::from_str(r#"{"home":1,"away":2}"#).unwrap();
        assert_eq!(ok, Fixture::new(TeamId(1), TeamId(2)));

        let err = serde_json::from_str::<Fixture>(r#"{"home":1,"away":1}"#).unwrap_err();
        assert!(err.to_string().contains("with itself"));

        let week = serde_json::from_str::<Week>(r#"{"games":[{"home":3,"away":3}]}"#);
        assert!(week.is_err());
    }
}
