//! League domain models.
//!
//! Provides the core data types for a round-robin season: teams and their
//! statistics, players, fixtures, weeks, and recent form.
//!
//! # Domain Mappings
//!
//! | u-league | Football | Chess | Esports |
//! |----------|----------|-------|---------|
//! | Team | Club | Player | Roster |
//! | Player | Squad member | n/a | Player |
//! | Fixture | Match | Game | Series |
//! | Week | Matchday | Round | Split week |

mod fixture;
mod form;
mod identity;
mod player;
mod team;

pub use fixture::{Fixture, Week};
pub use form::{GameResult, RecentForm, DEFAULT_FORM_WINDOW};
pub use identity::{TeamId, TeamIdAllocator};
pub use player::{Player, PlayerPosition, PlayerStat, PlayerStats};
pub use team::{Team, TeamStat, TeamStats};
