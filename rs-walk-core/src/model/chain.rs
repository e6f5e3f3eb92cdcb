use log::{debug, trace};
use rand::Rng;

use super::entry::{Entry, EntryId};
use super::registry::Registry;
use super::state::WalkState;
use crate::error::ChainError;

/// Markov chain over states of type `S`.
///
/// The chain owns the registry, and with it every stored state, for its
/// whole lifetime. The five state operations come from `S: WalkState`.
///
/// # Responsibilities
/// - Build the registry from observed states and transitions
/// - Expose sampling and walk generation (see `generator`)
/// - Dispose every stored state exactly once at teardown
///
/// # Notes
/// - Single-threaded: mutation needs `&mut self`, so a shared chain is
///   read-only.
/// - Teardown runs on [`Chain::destroy`] or when the chain is dropped,
///   including on early-return error paths.
#[derive(Debug)]
pub struct Chain<S: WalkState> {
	registry: Registry<S>,
}

impl<S: WalkState> Default for Chain<S> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: WalkState> Chain<S> {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self { registry: Registry::new() }
	}

	/// Idempotent lookup-or-insert of `raw`.
	///
	/// # Errors
	/// Returns [`ChainError::Allocation`] if the registry cannot grow.
	pub fn insert_state(&mut self, raw: &S) -> Result<EntryId, ChainError> {
		self.registry.lookup_or_insert(raw)
	}

	/// Resolves `raw` to its entry without inserting.
	pub fn find(&self, raw: &S) -> Option<EntryId> {
		self.registry.find(raw)
	}

	/// Records one observed `from -> to` transition.
	///
	/// # Errors
	/// - [`ChainError::UnknownEntry`] if either id is not in the chain.
	/// - [`ChainError::Allocation`] if the edge list cannot grow.
	///
	/// Nothing is modified when an error is returned.
	pub fn record_transition(&mut self, from: EntryId, to: EntryId) -> Result<(), ChainError> {
		if self.registry.get(to).is_none() {
			return Err(ChainError::UnknownEntry(to));
		}
		let source = self.registry.get_mut(from).ok_or(ChainError::UnknownEntry(from))?;
		source.add_transition(to)?;
		trace!("recorded transition {from} -> {to}");
		Ok(())
	}

	/// Picks a uniformly random non-terminal entry, for callers choosing
	/// their own walk start.
	pub fn pick_uniform_non_terminal<R: Rng>(&self, rng: &mut R) -> Result<EntryId, ChainError> {
		self.registry.pick_uniform_non_terminal(rng)
	}

	/// Picks a frequency-weighted successor of `source`.
	///
	/// Rejects entries without successors, such as a terminal state that
	/// was never followed by anything.
	pub fn pick_weighted_successor<R: Rng>(&self, rng: &mut R, source: EntryId) -> Result<EntryId, ChainError> {
		self.registry.pick_weighted_successor(rng, source)
	}

	pub fn registry(&self) -> &Registry<S> {
		&self.registry
	}

	pub fn len(&self) -> usize {
		self.registry.len()
	}

	pub fn is_empty(&self) -> bool {
		self.registry.is_empty()
	}

	pub fn first(&self) -> Option<EntryId> {
		self.registry.first()
	}

	pub fn entry(&self, id: EntryId) -> Option<&Entry<S>> {
		self.registry.get(id)
	}

	pub fn state(&self, id: EntryId) -> Option<&S> {
		self.registry.get(id).map(Entry::state)
	}

	/// Iterates over the entries in insertion order.
	pub fn entries(&self) -> impl Iterator<Item = (EntryId, &Entry<S>)> {
		self.registry.iter()
	}

	/// Tears the chain down, disposing every stored state.
	pub fn destroy(self) {
		drop(self);
	}
}

impl<S: WalkState> Drop for Chain<S> {
	fn drop(&mut self) {
		let released = self.registry.dispose_all();
		debug!("chain released {released} states");
	}
}
