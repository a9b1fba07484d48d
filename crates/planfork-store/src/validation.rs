use planfork_types::PlanSnapshot;

use crate::error::Result;
use crate::records::CommitRecord;
use crate::traits::BranchReader;

/// Result of validating one branch's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub branch: String,
    pub commit_count: u64,
    pub ids_strictly_increasing: bool,
    pub snapshot_derivable: bool,
    pub favourites_monotonic: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific invariant violation detected during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Index of the offending commit in the history, oldest first.
    pub index: usize,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// A commit id is not greater than its predecessor's.
    NonMonotonicId,
    /// The branch snapshot does not equal the last commit's snapshot.
    SnapshotMismatch,
    /// A favourite present in one commit is missing from a later one.
    FavouriteRemoved,
}

/// Branch history validator.
///
/// Checks the invariants the store is supposed to maintain: strictly
/// increasing commit ids, a snapshot derivable from the last commit, and
/// favourite sets that never shrink along the history.
pub struct BranchValidator;

impl BranchValidator {
    pub fn validate<R: BranchReader>(reader: &R, name: &str) -> Result<ValidationReport> {
        let branch = reader.branch(name)?;
        let history = branch.history.records();

        let mut violations = Vec::new();
        let mut ids_strictly_increasing = true;
        let mut favourites_monotonic = true;

        for (index, pair) in history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);

            if next.id <= prev.id {
                ids_strictly_increasing = false;
                violations.push(Violation {
                    index: index + 1,
                    kind: ViolationKind::NonMonotonicId,
                    description: format!("commit id {} follows {}", next.id, prev.id),
                });
            }

            if !favourites_shrink_free(prev, next) {
                favourites_monotonic = false;
                violations.push(Violation {
                    index: index + 1,
                    kind: ViolationKind::FavouriteRemoved,
                    description: "a favourite disappeared between commits".into(),
                });
            }
        }

        let expected = history
            .last()
            .map(|record| record.snapshot.clone())
            .unwrap_or_else(PlanSnapshot::empty);
        let snapshot_derivable = branch.snapshot == expected;
        if !snapshot_derivable {
            violations.push(Violation {
                index: history.len().saturating_sub(1),
                kind: ViolationKind::SnapshotMismatch,
                description: "branch snapshot does not match the last commit".into(),
            });
        }

        Ok(ValidationReport {
            branch: name.to_string(),
            commit_count: history.len() as u64,
            ids_strictly_increasing,
            snapshot_derivable,
            favourites_monotonic,
            violations,
        })
    }

    /// Validate every branch in the store.
    pub fn validate_all<R: BranchReader>(reader: &R) -> Result<Vec<ValidationReport>> {
        let names = reader.branch_names()?;
        let mut reports = Vec::with_capacity(names.len());
        for name in &names {
            reports.push(Self::validate(reader, name)?);
        }
        Ok(reports)
    }
}

fn favourites_shrink_free(prev: &CommitRecord, next: &CommitRecord) -> bool {
    prev.snapshot
        .fav_courses
        .is_subset_of(&next.snapshot.fav_courses)
        && prev
            .snapshot
            .fav_events
            .is_subset_of(&next.snapshot.fav_events)
}
