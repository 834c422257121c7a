//! Team identity.
//!
//! Team numbers are handed out by an explicit allocator owned by whoever
//! builds the roster of teams, rather than by process-wide state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique team identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Raw numeric value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TeamId {
    fn from(value: u32) -> Self {
        TeamId(value)
    }
}

/// Sequential team-number allocator.
///
/// Numbers start at 1 and increase by one per allocation.
///
/// # Example
/// ```
/// use u_league::models::TeamIdAllocator;
///
/// let mut ids = TeamIdAllocator::new();
/// assert_eq!(ids.next_id().get(), 1);
/// assert_eq!(ids.next_id().get(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamIdAllocator {
    next: u32,
}

impl TeamIdAllocator {
    /// Creates an allocator whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates an allocator starting at `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Returns a fresh id.
    pub fn next_id(&mut self) -> TeamId {
        let id = TeamId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> TeamId {
        TeamId(self.next)
    }
}

impl Default for TeamIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
