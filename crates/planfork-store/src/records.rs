use serde::{Deserialize, Serialize};

use planfork_types::{CommitId, PlanSnapshot};

/// One recorded state transition on a branch.
///
/// A commit stores the full snapshot after applying the mutation, not a
/// diff. Replay and inspection stay trivial and history sizes here are
/// small. Records are immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: CommitId,
    pub message: String,
    pub snapshot: PlanSnapshot,
}

impl CommitRecord {
    pub fn new(id: CommitId, message: impl Into<String>, snapshot: PlanSnapshot) -> Self {
        Self {
            id,
            message: message.into(),
            snapshot,
        }
    }
}

/// Append-only ordered sequence of commits.
///
/// Records are never reordered, rewritten, or truncated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLog {
    records: Vec<CommitRecord>,
}

impl CommitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the log.
    pub fn push(&mut self, record: CommitRecord) {
        self.records.push(record);
    }

    /// The most recent commit, if any.
    pub fn last(&self) -> Option<&CommitRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommitRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a CommitLog {
    type Item = &'a CommitRecord;
    type IntoIter = std::slice::Iter<'a, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
