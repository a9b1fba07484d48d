use serde::{Deserialize, Serialize};

use planfork_types::PlanSnapshot;

use crate::records::{CommitLog, CommitRecord};

/// An independently evolving line of plan state.
///
/// Invariant, maintained by the store as a single atomic update: `snapshot`
/// always equals the last commit's snapshot, or the empty snapshot when the
/// history is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    name: String,
    pub snapshot: PlanSnapshot,
    pub history: CommitLog,
}

impl Branch {
    /// A fresh branch with an empty snapshot and empty history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            snapshot: PlanSnapshot::empty(),
            history: CommitLog::new(),
        }
    }

    /// The branch name, immutable once created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the snapshot and append the matching commit in one step.
    pub fn record(&mut self, commit: CommitRecord) {
        self.snapshot = commit.snapshot.clone();
        self.history.push(commit);
    }
}

#[cfg(test)]
mod tests {
    use planfork_types::{CommitClock, CourseId};

    use super::*;

    #[test]
    fn new_branch_is_empty() {
        let branch = Branch::new("main");
        assert_eq!(branch.name(), "main");
        assert!(branch.snapshot.is_empty());
        assert!(branch.history.is_empty());
    }

    #[test]
    fn record_keeps_snapshot_and_history_consistent() {
        let clock = CommitClock::new();
        let mut branch = Branch::new("main");

        let mut snap = PlanSnapshot::empty();
        snap.courses.push(CourseId::new("CS101"));
        branch.record(CommitRecord::new(clock.tick(), "Added course", snap.clone()));

        assert_eq!(branch.snapshot, snap);
        assert_eq!(branch.history.len(), 1);
        assert_eq!(branch.history.last().unwrap().snapshot, branch.snapshot);
    }
}
