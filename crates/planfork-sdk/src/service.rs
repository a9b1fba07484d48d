use serde::{Deserialize, Serialize};

use planfork_engine::Mutation;
use planfork_store::{
    Branch, BranchReader, BranchValidator, BranchWriter, CommitRecord, InMemoryBranchStore,
    Result, ValidationReport,
};
use planfork_types::{CommitId, CourseId, EventId, PlanSnapshot};

/// One line of commit history for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub id: CommitId,
    pub message: String,
}

/// The planfork versioning service.
///
/// Owns the branch store outright — there is no ambient singleton; callers
/// construct a `Planfork` and pass it around. All failure modes come from
/// the store layer ([`planfork_store::StoreError`]); the facade adds none of
/// its own. Empty identifiers are a silent no-op on every mutating call:
/// the snapshot is unchanged and no commit is recorded.
pub struct Planfork {
    store: InMemoryBranchStore,
}

impl Planfork {
    /// A service with no branches.
    pub fn new() -> Self {
        Self {
            store: InMemoryBranchStore::new(),
        }
    }

    /// A service with a single empty `main` branch, the usual starting
    /// point.
    pub fn init() -> Result<Self> {
        let service = Self::new();
        service.store.create_branch("main")?;
        Ok(service)
    }

    /// Create a new empty branch.
    ///
    /// An empty name is ignored and returns `Ok(false)`. A malformed or
    /// duplicate name is surfaced as an error; existing branches are never
    /// silently reset. Returns `Ok(true)` once the branch exists.
    pub fn create_branch(&self, name: &str) -> Result<bool> {
        if name.is_empty() {
            tracing::debug!("ignoring create_branch with empty name");
            return Ok(false);
        }
        self.store.create_branch(name)?;
        Ok(true)
    }

    /// Append a course to the branch's plan. Commit message: `"Added course"`.
    pub fn add_course(&self, branch: &str, course: &str) -> Result<Option<CommitRecord>> {
        self.store
            .apply(branch, &Mutation::AddCourse(CourseId::new(course)))
    }

    /// Favourite a course on the branch. Commit message: `"Favourited course"`.
    ///
    /// Favouriting an already-favourited course leaves the set unchanged
    /// but still records a commit.
    pub fn favourite_course(&self, branch: &str, course: &str) -> Result<Option<CommitRecord>> {
        self.store
            .apply(branch, &Mutation::FavouriteCourse(CourseId::new(course)))
    }

    /// Favourite an event on the branch. Commit message: `"Favourited event"`.
    pub fn favourite_event(&self, branch: &str, event: &str) -> Result<Option<CommitRecord>> {
        self.store
            .apply(branch, &Mutation::FavouriteEvent(EventId::new(event)))
    }

    /// Merge `source` into `target`, recording `"Merged branch <source>"` on
    /// the target. Fails if either branch is unknown; self-merge is allowed.
    pub fn merge_branch(&self, target: &str, source: &str) -> Result<CommitRecord> {
        self.store.merge(target, source)
    }

    /// All branch names in creation order.
    pub fn list_branches(&self) -> Result<Vec<String>> {
        self.store.branch_names()
    }

    /// The named branch: current snapshot plus full history.
    pub fn branch(&self, name: &str) -> Result<Branch> {
        self.store.branch(name)
    }

    /// The branch's current snapshot.
    pub fn snapshot(&self, branch: &str) -> Result<PlanSnapshot> {
        self.store.snapshot(branch)
    }

    /// The branch's commits, oldest first.
    pub fn history(&self, branch: &str) -> Result<Vec<CommitRecord>> {
        self.store.history(branch)
    }

    /// Number of commits on the branch.
    pub fn commit_count(&self, branch: &str) -> Result<u64> {
        self.store.commit_count(branch)
    }

    /// The newest `limit` commits, newest first, as display summaries.
    pub fn log(&self, branch: &str, limit: usize) -> Result<Vec<CommitSummary>> {
        let history = self.store.history(branch)?;
        Ok(history
            .iter()
            .rev()
            .take(limit)
            .map(|record| CommitSummary {
                id: record.id,
                message: record.message.clone(),
            })
            .collect())
    }

    /// Check one branch's history invariants.
    pub fn validate(&self, branch: &str) -> Result<ValidationReport> {
        BranchValidator::validate(&self.store, branch)
    }

    /// Check every branch's history invariants.
    pub fn validate_all(&self) -> Result<Vec<ValidationReport>> {
        BranchValidator::validate_all(&self.store)
    }

    /// The underlying store, for callers wiring their own readers.
    pub fn store(&self) -> &InMemoryBranchStore {
        &self.store
    }
}

impl Default for Planfork {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use planfork_store::StoreError;
    use planfork_types::{CourseId, EventId};

    use super::*;

    #[test]
    fn init_creates_main() {
        let plans = Planfork::init().unwrap();
        assert_eq!(plans.list_branches().unwrap(), vec!["main".to_string()]);
        assert_eq!(plans.commit_count("main").unwrap(), 0);
    }

    #[test]
    fn new_is_empty() {
        let plans = Planfork::new();
        assert!(plans.list_branches().unwrap().is_empty());
    }

    #[test]
    fn create_branch_with_empty_name_is_ignored() {
        let plans = Planfork::init().unwrap();
        assert!(!plans.create_branch("").unwrap());
        assert_eq!(plans.list_branches().unwrap().len(), 1);
    }

    #[test]
    fn create_duplicate_branch_is_surfaced() {
        let plans = Planfork::init().unwrap();
        let err = plans.create_branch("main").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateBranch { .. }));
    }

    #[test]
    fn ghost_branch_fails_with_not_found() {
        let plans = Planfork::init().unwrap();
        let err = plans.branch("ghost").unwrap_err();
        assert_eq!(
            err,
            StoreError::BranchNotFound {
                name: "ghost".into()
            }
        );
    }

    #[test]
    fn add_course_with_empty_id_never_commits() {
        let plans = Planfork::init().unwrap();
        assert!(plans.add_course("main", "").unwrap().is_none());
        assert_eq!(plans.commit_count("main").unwrap(), 0);
        assert!(plans.snapshot("main").unwrap().courses.is_empty());
    }

    #[test]
    fn favouriting_twice_keeps_set_but_grows_history() {
        let plans = Planfork::init().unwrap();
        plans.favourite_course("main", "CS101").unwrap();
        plans.favourite_course("main", "CS101").unwrap();

        let snap = plans.snapshot("main").unwrap();
        assert_eq!(snap.fav_courses.len(), 1);
        assert_eq!(plans.commit_count("main").unwrap(), 2);
    }

    #[test]
    fn branch_and_merge_scenario() {
        let plans = Planfork::init().unwrap();

        plans.add_course("main", "CS101").unwrap();
        let snap = plans.snapshot("main").unwrap();
        assert_eq!(snap.courses, vec![CourseId::new("CS101")]);
        assert_eq!(plans.commit_count("main").unwrap(), 1);

        plans.favourite_course("main", "CS101").unwrap();
        let snap = plans.snapshot("main").unwrap();
        assert!(snap.fav_courses.contains(&CourseId::new("CS101")));
        assert_eq!(plans.commit_count("main").unwrap(), 2);

        assert!(plans.create_branch("dev").unwrap());
        plans.add_course("dev", "CS102").unwrap();
        assert_eq!(
            plans.snapshot("dev").unwrap().courses,
            vec![CourseId::new("CS102")]
        );

        plans.merge_branch("main", "dev").unwrap();
        let main = plans.branch("main").unwrap();
        assert_eq!(
            main.snapshot.courses,
            vec![CourseId::new("CS101"), CourseId::new("CS102")]
        );
        assert!(main.snapshot.fav_courses.contains(&CourseId::new("CS101")));
        assert_eq!(main.snapshot.fav_courses.len(), 1);
        assert_eq!(main.history.len(), 3);
        assert_eq!(main.history.last().unwrap().message, "Merged branch dev");
    }

    #[test]
    fn self_merge_appends_one_commit_and_keeps_sets() {
        let plans = Planfork::init().unwrap();
        plans.add_course("main", "CS101").unwrap();
        plans.favourite_event("main", "expo").unwrap();

        let before = plans.snapshot("main").unwrap();
        plans.merge_branch("main", "main").unwrap();
        let after = plans.snapshot("main").unwrap();

        assert_eq!(before.fav_courses, after.fav_courses);
        assert_eq!(before.fav_events, after.fav_events);
        assert_eq!(plans.commit_count("main").unwrap(), 3);
        assert!(after.fav_events.contains(&EventId::new("expo")));
    }

    #[test]
    fn merge_with_unknown_source_fails() {
        let plans = Planfork::init().unwrap();
        assert!(matches!(
            plans.merge_branch("main", "ghost").unwrap_err(),
            StoreError::BranchNotFound { .. }
        ));
    }

    #[test]
    fn history_messages_in_order() {
        let plans = Planfork::init().unwrap();
        plans.add_course("main", "CS101").unwrap();
        plans.favourite_course("main", "CS101").unwrap();

        let messages: Vec<_> = plans
            .history("main")
            .unwrap()
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert_eq!(messages, vec!["Added course", "Favourited course"]);
    }

    #[test]
    fn log_is_newest_first_and_limited() {
        let plans = Planfork::init().unwrap();
        plans.add_course("main", "a").unwrap();
        plans.add_course("main", "b").unwrap();
        plans.favourite_course("main", "a").unwrap();

        let log = plans.log("main", 2).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].message, "Favourited course");
        assert_eq!(log[1].message, "Added course");
        assert!(log[0].id > log[1].id);
    }

    #[test]
    fn validate_all_after_activity() {
        let plans = Planfork::init().unwrap();
        plans.create_branch("dev").unwrap();
        plans.add_course("main", "CS101").unwrap();
        plans.add_course("dev", "CS102").unwrap();
        plans.merge_branch("main", "dev").unwrap();

        let reports = plans.validate_all().unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.is_valid()));
    }

    #[test]
    fn commit_summary_serializes_for_display() {
        let plans = Planfork::init().unwrap();
        plans.add_course("main", "CS101").unwrap();

        let log = plans.log("main", 1).unwrap();
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("Added course"));
    }
}
