//! Season configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};
use crate::models::DEFAULT_FORM_WINDOW;

/// How named match events are matched to players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerLookup {
    /// Name index built once per simulation pass.
    #[default]
    Indexed,
    /// Linear search over every roster for each event.
    Scan,
}

/// Tunables for a season.
///
/// # Example
/// ```
/// use u_league::config::{PlayerLookup, SeasonConfig};
///
/// let config = SeasonConfig::new()
///     .with_form_window(3)
///     .with_player_lookup(PlayerLookup::Scan);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    /// Results kept in each team's recent form (default 5).
    pub form_window: usize,
    /// Player resolution strategy for match events.
    pub player_lookup: PlayerLookup,
}

impl SeasonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recent-form window.
    pub fn with_form_window(mut self, window: usize) -> Self {
        self.form_window = window;
        self
    }

    /// Sets the player lookup strategy.
    pub fn with_player_lookup(mut self, lookup: PlayerLookup) -> Self {
        self.player_lookup = lookup;
        self
    }

    /// Rejects a zero form window.
    pub fn validate(&self) -> Result<()> {
        if self.form_window == 0 {
            return Err(LeagueError::InvalidConfig(
                "form_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            form_window: DEFAULT_FORM_WINDOW,
            player_lookup: PlayerLookup::Indexed,
        }
    }
}
