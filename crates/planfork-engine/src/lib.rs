//! Pure state transition engines for planfork.
//!
//! Both engines are stateless functions over [`PlanSnapshot`] values:
//!
//! - [`mutation`] applies a single caller intent (add a course, favourite a
//!   course or event) and produces the commit message for it.
//! - [`merge`] computes the conflict-free union of two snapshots.
//!
//! Neither engine touches branch storage; the store invokes them while
//! holding the branch lock, so an engine call plus the resulting commit
//! append form one atomic transition.
//!
//! [`PlanSnapshot`]: planfork_types::PlanSnapshot

pub mod merge;
pub mod mutation;

pub use merge::{merge, merge_message};
pub use mutation::{Mutation, MutationOutcome};
