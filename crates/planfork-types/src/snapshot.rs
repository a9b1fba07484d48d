use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, EventId};
use crate::ordered::OrderedSet;

/// The value of a branch's plan state at a point in its history.
///
/// A snapshot is a plain value: the store replaces a branch's snapshot
/// wholesale on every commit and never mutates one in place.
///
/// Field semantics differ deliberately:
/// - `courses` is an append-only list. Duplicates are allowed and insertion
///   order is significant.
/// - `fav_courses` and `fav_events` are sets that only ever grow within a
///   branch's lifetime; a merge can add elements but nothing removes them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub courses: Vec<CourseId>,
    pub fav_courses: OrderedSet<CourseId>,
    pub fav_events: OrderedSet<EventId>,
}

impl PlanSnapshot {
    /// The empty snapshot every new branch starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.fav_courses.is_empty() && self.fav_events.is_empty()
    }
}
