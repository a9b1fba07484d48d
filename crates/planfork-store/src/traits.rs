use planfork_engine::Mutation;
use planfork_types::PlanSnapshot;

use crate::branch::Branch;
use crate::error::Result;
use crate::records::CommitRecord;

/// Write boundary for branch store operations.
///
/// Every method that records a commit is atomic per branch: the snapshot
/// replacement and the history append are never observable separately, and
/// two operations on the same branch never interleave.
pub trait BranchWriter: Send + Sync {
    /// Create a new empty branch.
    ///
    /// Fails with `StoreError::InvalidName` for malformed names and
    /// `StoreError::DuplicateBranch` if the name is already taken.
    fn create_branch(&self, name: &str) -> Result<()>;

    /// Apply a mutation to the named branch as one transaction.
    ///
    /// Returns `Ok(None)` when the mutation is an empty-input no-op; no
    /// commit is recorded and the snapshot is unchanged.
    fn apply(&self, name: &str, mutation: &Mutation) -> Result<Option<CommitRecord>>;

    /// Merge `source` into `target`, recording a `"Merged branch <source>"`
    /// commit on the target.
    ///
    /// Both branches must exist. Merging a branch into itself is permitted:
    /// the union is idempotent on the set fields, and one commit is still
    /// recorded.
    fn merge(&self, target: &str, source: &str) -> Result<CommitRecord>;
}

/// Read boundary for branch store queries.
pub trait BranchReader: Send + Sync {
    /// `true` if a branch with this name exists.
    fn contains(&self, name: &str) -> Result<bool>;

    /// The named branch: current snapshot plus full history.
    fn branch(&self, name: &str) -> Result<Branch>;

    /// The branch's current snapshot.
    fn snapshot(&self, name: &str) -> Result<PlanSnapshot>;

    /// The branch's commits, oldest first.
    fn history(&self, name: &str) -> Result<Vec<CommitRecord>>;

    /// All branch names in creation order.
    fn branch_names(&self) -> Result<Vec<String>>;

    /// Number of commits on the named branch.
    fn commit_count(&self, name: &str) -> Result<u64>;
}
