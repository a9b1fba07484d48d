//! Foundation types for planfork.
//!
//! This crate provides the core identifier, collection, and clock types used
//! throughout the planfork system. Every other planfork crate depends on
//! `planfork-types`.
//!
//! # Key Types
//!
//! - [`CourseId`] / [`EventId`] — Domain identifiers for courses and events
//! - [`OrderedSet`] — Insertion-order-preserving set used for favourites
//! - [`PlanSnapshot`] — The value of a branch's plan state at a point in time
//! - [`CommitId`] / [`CommitClock`] — Strictly increasing logical commit ids

pub mod clock;
pub mod ids;
pub mod ordered;
pub mod snapshot;

pub use clock::{CommitClock, CommitId};
pub use ids::{CourseId, EventId};
pub use ordered::OrderedSet;
pub use snapshot::PlanSnapshot;
