use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Logical identifier of a commit.
///
/// Ids are issued by a [`CommitClock`] and are strictly increasing for the
/// lifetime of the process, so two commits can always be ordered
/// deterministically. Wall-clock timestamps are deliberately not used: two
/// commits landing within the same clock tick would collide.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommitId(u64);

impl CommitId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitId({})", self.0)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Monotonic source of [`CommitId`]s.
///
/// A shared atomic counter: every call to [`CommitClock::tick`] returns an id
/// strictly greater than all previously issued ones, regardless of which
/// thread asks. The first issued id is `c1`.
#[derive(Debug, Default)]
pub struct CommitClock {
    next: AtomicU64,
}

impl CommitClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next commit id.
    pub fn tick(&self) -> CommitId {
        CommitId(self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}
