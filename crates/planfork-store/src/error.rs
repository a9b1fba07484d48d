/// Errors produced by branch store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The named branch does not exist. Acting on a phantom branch is a
    /// caller bug, so this is always surfaced, never swallowed.
    #[error("branch not found: {name}")]
    BranchNotFound { name: String },

    /// A branch with this name already exists. Re-creating a branch would
    /// discard its history, so duplicates are rejected rather than reset.
    #[error("branch already exists: {name}")]
    DuplicateBranch { name: String },

    /// The branch name failed validation.
    #[error("invalid branch name: {name}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A lock guarding branch state was poisoned by a panicking writer.
    #[error("branch store lock poisoned")]
    LockPoisoned,
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
