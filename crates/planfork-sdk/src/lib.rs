//! High-level planfork API.
//!
//! [`Planfork`] is the versioning service facade: the only component an
//! embedding caller (typically a UI layer) talks to. Every mutating call is
//! one atomic commit on one branch; the facade holds no state of its own
//! beyond the store it owns.
//!
//! [`Session`] carries the caller's "current branch" pointer. The core is
//! deliberately stateless about selection — every facade call names its
//! branch explicitly — so the pointer lives out here with the caller.
//!
//! ```
//! use planfork_sdk::{Planfork, Session};
//!
//! let plans = Planfork::init().unwrap();
//! let mut session = Session::new(&plans, "main").unwrap();
//!
//! plans.add_course(session.current(), "CS101").unwrap();
//! plans.favourite_course(session.current(), "CS101").unwrap();
//!
//! plans.create_branch("dev").unwrap();
//! session.switch(&plans, "dev").unwrap();
//! plans.add_course(session.current(), "CS102").unwrap();
//!
//! plans.merge_branch("main", "dev").unwrap();
//! assert_eq!(plans.snapshot("main").unwrap().courses.len(), 2);
//! ```

pub mod service;
pub mod session;

pub use planfork_store::{Result, StoreError};
pub use service::{CommitSummary, Planfork};
pub use session::Session;
