use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use planfork_engine::{merge, merge_message, mutation, Mutation};
use planfork_types::{CommitClock, PlanSnapshot};

use crate::branch::Branch;
use crate::error::{Result, StoreError};
use crate::names::validate_branch_name;
use crate::records::CommitRecord;
use crate::traits::{BranchReader, BranchWriter};

/// In-memory branch store: the single owner of all branch state.
///
/// The branch map sits behind a `RwLock`; each branch sits behind its own
/// `Mutex` inside the map. A commit operation holds one branch's mutex for
/// the whole read-snapshot / compute / append sequence, so same-branch
/// operations serialize while distinct branches commit in parallel.
///
/// Data is lost when the store is dropped.
pub struct InMemoryBranchStore {
    inner: RwLock<BranchMap>,
    clock: CommitClock,
}

#[derive(Default)]
struct BranchMap {
    branches: HashMap<String, Arc<Mutex<Branch>>>,
    // Creation order, for stable enumeration.
    order: Vec<String>,
}

impl InMemoryBranchStore {
    /// Create a new store with no branches.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BranchMap::default()),
            clock: CommitClock::new(),
        }
    }

    fn cell(&self, name: &str) -> Result<Arc<Mutex<Branch>>> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        map.branches
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::BranchNotFound {
                name: name.to_string(),
            })
    }

    fn commit_on(&self, branch: &mut Branch, message: String, snapshot: PlanSnapshot) -> CommitRecord {
        let record = CommitRecord::new(self.clock.tick(), message, snapshot);
        branch.record(record.clone());
        record
    }
}

impl Default for InMemoryBranchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchWriter for InMemoryBranchStore {
    fn create_branch(&self, name: &str) -> Result<()> {
        validate_branch_name(name)?;

        let mut map = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if map.branches.contains_key(name) {
            return Err(StoreError::DuplicateBranch {
                name: name.to_string(),
            });
        }

        map.branches
            .insert(name.to_string(), Arc::new(Mutex::new(Branch::new(name))));
        map.order.push(name.to_string());
        tracing::debug!(branch = name, "created branch");
        Ok(())
    }

    fn apply(&self, name: &str, mutation_intent: &Mutation) -> Result<Option<CommitRecord>> {
        let cell = self.cell(name)?;
        let mut branch = cell.lock().map_err(|_| StoreError::LockPoisoned)?;

        let Some(outcome) = mutation::apply(&branch.snapshot, mutation_intent) else {
            return Ok(None);
        };

        let record = self.commit_on(&mut branch, outcome.message.to_string(), outcome.snapshot);
        tracing::debug!(branch = name, commit = %record.id, message = %record.message, "applied mutation");
        Ok(Some(record))
    }

    fn merge(&self, target: &str, source: &str) -> Result<CommitRecord> {
        // Self-merge takes one lock; the union with itself is idempotent on
        // the set fields but the commit is still recorded.
        if target == source {
            let cell = self.cell(target)?;
            let mut branch = cell.lock().map_err(|_| StoreError::LockPoisoned)?;
            let merged = merge(&branch.snapshot, &branch.snapshot);
            let record = self.commit_on(&mut branch, merge_message(source), merged);
            tracing::info!(branch = target, commit = %record.id, "self-merge recorded");
            return Ok(record);
        }

        // Resolve both branches up front so an unknown name fails before
        // anything is read. The source snapshot is cloned under its own
        // lock, then released; the two locks are never held together.
        let target_cell = self.cell(target)?;
        let source_cell = self.cell(source)?;

        let source_snapshot = {
            let source_branch = source_cell.lock().map_err(|_| StoreError::LockPoisoned)?;
            source_branch.snapshot.clone()
        };

        let mut target_branch = target_cell.lock().map_err(|_| StoreError::LockPoisoned)?;
        let merged = merge(&target_branch.snapshot, &source_snapshot);
        let record = self.commit_on(&mut target_branch, merge_message(source), merged);
        tracing::info!(
            target = target,
            source = source,
            commit = %record.id,
            "merged branch"
        );
        Ok(record)
    }
}

impl BranchReader for InMemoryBranchStore {
    fn contains(&self, name: &str) -> Result<bool> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.branches.contains_key(name))
    }

    fn branch(&self, name: &str) -> Result<Branch> {
        let cell = self.cell(name)?;
        let branch = cell.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(branch.clone())
    }

    fn snapshot(&self, name: &str) -> Result<PlanSnapshot> {
        let cell = self.cell(name)?;
        let branch = cell.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(branch.snapshot.clone())
    }

    fn history(&self, name: &str) -> Result<Vec<CommitRecord>> {
        let cell = self.cell(name)?;
        let branch = cell.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(branch.history.records().to_vec())
    }

    fn branch_names(&self) -> Result<Vec<String>> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.order.clone())
    }

    fn commit_count(&self, name: &str) -> Result<u64> {
        let cell = self.cell(name)?;
        let branch = cell.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(branch.history.len() as u64)
    }
}
