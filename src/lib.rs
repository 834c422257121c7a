//! Round-robin league seasons.
//!
//! Generates a double round-robin schedule for a set of teams, applies
//! match outcomes to team and player statistics, and keeps a ranked
//! leaderboard.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Player`, `Fixture`, `Week`, `RecentForm`
//! - **`schedule`**: Pair generation, greedy week packing, week reordering
//! - **`leaderboard`**: Ranking comparator and standings export
//! - **`simulation`**: Outcome providers and the season simulation pass
//! - **`season`**: Facade tying the above together
//! - **`config`**: Season options
//! - **`validation`**: Input integrity checks (duplicate IDs and names, team count)
//!
//! # Example
//!
//! ```
//! use u_league::models::{Team, TeamIdAllocator};
//! use u_league::simulation::MatchOutcome;
//! use u_league::Season;
//!
//! let mut ids = TeamIdAllocator::new();
//! let teams = vec![Team::new(ids.next_id(), "Home"), Team::new(ids.next_id(), "Away")];
//! let mut season = Season::new(teams).unwrap();
//!
//! let mut provider = |_: &Team, _: &Team| -> Result<MatchOutcome, u_league::BoxError> {
//!     Ok(MatchOutcome::score(2, 1))
//! };
//! season.simulate(&mut provider).unwrap();
//!
//! let table = season.leaderboard();
//! assert_eq!(table[0].points, 3);
//! assert_eq!(table[1].points, 3);
//! ```
//!
//! # References
//!
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod models;
pub mod schedule;
pub mod season;
pub mod simulation;
pub mod validation;

pub use config::{PlayerLookup, SeasonConfig};
pub use error::{BoxError, LeagueError, Result};
pub use leaderboard::{Leaderboard, LeaderboardRow};
pub use schedule::Schedule;
pub use season::Season;
