//! Test utilities for Warren development.
//!
//! Provides the [`Critter`] fixture payload used by the pool and snapshot
//! integration suites: a game-flavoured `Pod` struct with a kind tag,
//! motion state, health, and an embedded target handle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{kind, Critter};
