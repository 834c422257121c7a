//! Player model.
//!
//! A player has a name, a position, and a small statistics record that the
//! season simulator increments as match events arrive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing position. Declaration order is the roster iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    /// All positions in roster order.
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ];

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// Player statistic tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStat {
    GamesPlayed,
    Goals,
    Assists,
    Tackles,
    Interceptions,
}

impl PlayerStat {
    /// All player statistics.
    pub const ALL: [PlayerStat; 5] = [
        PlayerStat::GamesPlayed,
        PlayerStat::Goals,
        PlayerStat::Assists,
        PlayerStat::Tackles,
        PlayerStat::Interceptions,
    ];
}

/// Per-player counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub tackles: u32,
    pub interceptions: u32,
}

impl PlayerStats {
    /// Reads a statistic by tag.
    pub fn get(&self, stat: PlayerStat) -> u32 {
        match stat {
            PlayerStat::GamesPlayed => self.games_played,
            PlayerStat::Goals => self.goals,
            PlayerStat::Assists => self.assists,
            PlayerStat::Tackles => self.tackles,
            PlayerStat::Interceptions => self.interceptions,
        }
    }

    /// Writes a statistic by tag.
    pub fn set(&mut self, stat: PlayerStat, value: u32) {
        *self.slot_mut(stat) = value;
    }

    /// Adds one to a statistic.
    pub fn increment(&mut self, stat: PlayerStat) {
        *self.slot_mut(stat) += 1;
    }

    fn slot_mut(&mut self, stat: PlayerStat) -> &mut u32 {
        match stat {
            PlayerStat::GamesPlayed => &mut self.games_played,
            PlayerStat::Goals => &mut self.goals,
            PlayerStat::Assists => &mut self.assists,
            PlayerStat::Tackles => &mut self.tackles,
            PlayerStat::Interceptions => &mut self.interceptions,
        }
    }
}

/// A squad member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name; used to attribute match events.
    pub name: String,
    /// Playing position.
    pub position: PlayerPosition,
    /// Accumulated statistics.
    pub stats: PlayerStats,
}

impl Player {
    /// Creates a player with zeroed statistics.
    pub fn new(name: impl Into<String>, position: PlayerPosition) -> Self {
        Self {
            name: name.into(),
            position,
            stats: PlayerStats::default(),
        }
    }

    /// Reads a statistic.
    pub fn stat(&self, stat: PlayerStat) -> u32 {
        self.stats.get(stat)
    }

    /// Zeroes all statistics.
    pub fn reset_stats(&mut self) {
        self.stats = PlayerStats::default();
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_stats_by_tag() {
        let mut p = Player::new("Kane", PlayerPosition::Forward);
        p.stats.increment(PlayerStat::Goals);
        p.stats.increment(PlayerStat::Goals);
        p.stats.set(PlayerStat::Tackles, 4);

        assert_eq!(p.stat(PlayerStat::Goals), 2);
        assert_eq!(p.stat(PlayerStat::Tackles), 4);
        assert_eq!(p.stat(PlayerStat::Assists), 0);

        p.reset_stats();
        for stat in PlayerStat::ALL {
            assert_eq!(p.stat(stat), 0);
        }
    }

    #[test]
    fn test_position_order() {
        let slots: Vec<usize> = PlayerPosition::ALL.iter().map(|p| p.slot()).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
    }
}
