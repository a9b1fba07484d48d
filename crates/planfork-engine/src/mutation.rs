use serde::{Deserialize, Serialize};

use planfork_types::{CourseId, EventId, PlanSnapshot};

/// A caller intent against a branch's snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Append a course to the plan. Duplicates are allowed; the course list
    /// keeps append order.
    AddCourse(CourseId),
    /// Mark a course as a favourite. Inserting an existing favourite leaves
    /// the set unchanged.
    FavouriteCourse(CourseId),
    /// Mark an event as a favourite. Same contract as [`Mutation::FavouriteCourse`].
    FavouriteEvent(EventId),
}

impl Mutation {
    /// The commit message recorded when this mutation is applied.
    pub fn message(&self) -> &'static str {
        match self {
            Mutation::AddCourse(_) => "Added course",
            Mutation::FavouriteCourse(_) => "Favourited course",
            Mutation::FavouriteEvent(_) => "Favourited event",
        }
    }

    /// `true` if the mutation carries an empty identifier and is therefore
    /// a no-op.
    pub fn is_empty_input(&self) -> bool {
        match self {
            Mutation::AddCourse(id) | Mutation::FavouriteCourse(id) => id.is_empty(),
            Mutation::FavouriteEvent(id) => id.is_empty(),
        }
    }
}

/// The result of a successful mutation: the message to record and the
/// snapshot after the transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationOutcome {
    pub message: &'static str,
    pub snapshot: PlanSnapshot,
}

/// Apply a mutation to a snapshot.
///
/// Returns `None` when the mutation carries an empty identifier; the caller
/// records no commit in that case. Re-favouriting an already-favourited item
/// returns `Some` with an unchanged snapshot: the action still happened and
/// the commit log records it.
pub fn apply(snapshot: &PlanSnapshot, mutation: &Mutation) -> Option<MutationOutcome> {
    if mutation.is_empty_input() {
        tracing::debug!(?mutation, "ignoring mutation with empty identifier");
        return None;
    }

    let mut next = snapshot.clone();
    match mutation {
        Mutation::AddCourse(id) => {
            next.courses.push(id.clone());
        }
        Mutation::FavouriteCourse(id) => {
            next.fav_courses.insert(id.clone());
        }
        Mutation::FavouriteEvent(id) => {
            next.fav_events.insert(id.clone());
        }
    }

    Some(MutationOutcome {
        message: mutation.message(),
        snapshot: next,
    })
}
