//! Weighted random walk engine.
//!
//! This crate builds a first-order Markov chain over any state type and
//! samples new state sequences from it:
//! - Deduplicating, append-only registry of observed states
//! - Per-state transition counts with frequency-weighted sampling
//! - Bounded walk generation rendering each visited state as it goes
//!
//! The engine is parameterized by the [`WalkState`] capability trait, so
//! the same chain drives a word generator and a board game simulator.

/// Chain model: registry, transitions, sampling and walk generation.
pub mod model;

/// Error type shared by every fallible chain operation.
pub mod error;

pub use error::ChainError;
pub use model::chain::Chain;
pub use model::entry::{Edge, Entry, EntryId};
pub use model::generator::{Walk, WalkEnd};
pub use model::state::WalkState;
pub use model::walk_input::{StartState, WalkInput};
