//! Top-level module for the Markov chain engine.
//!
//! Components, leaves first:
//! - The state capability trait (`WalkState`)
//! - Registry entries and their transition tables (`Entry`, `Edge`)
//! - The state registry (`Registry`)
//! - Uniform and weighted sampling over the registry
//! - Walk generation and its configuration (`WalkInput`)
//! - The owning aggregate (`Chain`)

/// Capability trait every state type implements.
pub mod state;

/// Registry entry: one unique state plus its outgoing weighted edges.
pub mod entry;

/// Append-only, deduplicating store of entries.
pub mod registry;

/// Uniform start selection and frequency-weighted successor selection.
mod sampler;

/// Bounded walk generation.
pub mod generator;

/// Walk configuration (start strategy, length bound).
pub mod walk_input;

/// The chain aggregate and its lifecycle.
pub mod chain;
