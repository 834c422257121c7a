//! Error types for season construction, schedule mutation, and simulation.

use thiserror::Error;

use crate::models::{TeamId, TeamStat};

/// Boxed error raised by an external outcome provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Errors produced by the league engine.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// A 1-based week number outside `[1, weeks]`.
    #[error("week {week} is out of range (schedule has {weeks} weeks)")]
    WeekOutOfRange { week: usize, weeks: usize },

    /// Attempted to write a statistic that is derived from others.
    #[error("statistic {0:?} is derived and cannot be set directly")]
    DerivedStatistic(TeamStat),

    /// Two teams share the same identifier.
    #[error("duplicate team id: {0}")]
    DuplicateTeamId(TeamId),

    /// A fixture references a team that is not part of the season.
    #[error("unknown team id: {0}")]
    UnknownTeam(TeamId),

    /// A fixture pairs a team with itself.
    #[error("fixture pairs team {0} with itself")]
    SelfFixture(TeamId),

    /// Configuration value rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The outcome provider failed; the simulation pass was aborted.
    #[error("match outcome provider failed")]
    Outcome(#[source] BoxError),
}

impl LeagueError {
    /// Wraps a provider failure.
    pub fn outcome(err: impl Into<BoxError>) -> Self {
        LeagueError::Outcome(err.into())
    }

    /// Whether the error leaves season state untouched.
    ///
    /// Provider failures abort mid-pass and keep earlier fixtures applied.
    pub fn is_state_preserving(&self) -> bool {
        !matches!(self, LeagueError::Outcome(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_out_of_range_message() {
        let err = LeagueError::WeekOutOfRange { week: 9, weeks: 6 };
        assert_eq!(
            err.to_string(),
            "week 9 is out of range (schedule has 6 weeks)"
        );
        assert!(err.is_state_preserving());
    }

    #[test]
    fn test_outcome_error_keeps_source() {
        let err = LeagueError::outcome("engine exploded");
        assert!(!err.is_state_preserving());
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("engine exploded"));
    }
}
