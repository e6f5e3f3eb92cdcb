use log::trace;

use super::entry::{Entry, EntryId};
use super::state::WalkState;
use crate::error::ChainError;

/// Ordered, append-only collection of unique states.
///
/// # Responsibilities
/// - Own every stored state and its entry
/// - Resolve a candidate state to its entry, inserting it if unknown
/// - Keep insertion order (the first entry is the first state observed)
///
/// # Invariants
/// - At most one entry per distinct state value (per `WalkState::equals`)
/// - Entries are never removed, so an `EntryId` stays valid for the
///   registry's lifetime
/// - `non_terminal` counts the entries whose state is not terminal
#[derive(Debug)]
pub struct Registry<S> {
	pub(super) entries: Vec<Entry<S>>,
	pub(super) non_terminal: usize,
}

impl<S> Default for Registry<S> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
			non_terminal: 0,
		}
	}
}

impl<S: WalkState> Registry<S> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of entries a walk may start from.
	pub fn non_terminal_len(&self) -> usize {
		self.non_terminal
	}

	/// Returns the entry matching `candidate` without inserting it.
	///
	/// Linear scan, there is no secondary index.
	pub fn find(&self, candidate: &S) -> Option<EntryId> {
		self.entries
			.iter()
			.position(|entry| entry.state().equals(candidate))
			.map(EntryId)
	}

	/// Returns the entry matching `candidate`, appending a new one holding
	/// `candidate.duplicate()` if none exists.
	///
	/// The candidate is compared as-is; it is only duplicated when a new
	/// entry has to be created.
	///
	/// # Errors
	/// Returns [`ChainError::Allocation`] if the registry cannot grow.
	/// No entry is added in that case.
	pub fn lookup_or_insert(&mut self, candidate: &S) -> Result<EntryId, ChainError> {
		if let Some(id) = self.find(candidate) {
			return Ok(id);
		}

		self.entries.try_reserve(1)?;
		let state = candidate.duplicate();
		let terminal = state.is_terminal();
		let id = EntryId(self.entries.len());
		self.entries.push(Entry::new(state, terminal));
		if !terminal {
			self.non_terminal += 1;
		}

		trace!("registered entry {id} (terminal: {terminal})");
		Ok(id)
	}

	pub fn get(&self, id: EntryId) -> Option<&Entry<S>> {
		self.entries.get(id.0)
	}

	pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry<S>> {
		self.entries.get_mut(id.0)
	}

	/// First entry ever inserted, the conventional start of a fixed walk.
	pub fn first(&self) -> Option<EntryId> {
		if self.entries.is_empty() { None } else { Some(EntryId(0)) }
	}

	/// Iterates over the entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry<S>)> {
		self.entries
			.iter()
			.enumerate()
			.map(|(index, entry)| (EntryId(index), entry))
	}

	/// Disposes every stored state in insertion order and empties the
	/// registry. Returns the number of states released.
	pub(crate) fn dispose_all(&mut self) -> usize {
		let entries = std::mem::take(&mut self.entries);
		self.non_terminal = 0;
		let released = entries.len();
		for entry in entries {
			entry.into_state().dispose();
		}
		released
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use std::collections::HashSet;
	use std::io;

	/// Small integer state, terminal at zero.
	#[derive(Debug, Clone, Copy, PartialEq)]
	struct Num(u8);

	impl WalkState for Num {
		fn equals(&self, other: &Self) -> bool {
			self.0 == other.0
		}

		fn duplicate(&self) -> Self {
			*self
		}

		fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
			write!(out, "{} ", self.0)
		}

		fn is_terminal(&self) -> bool {
			self.0 == 0
		}
	}

	#[test]
	fn empty_registry_has_no_first_entry() {
		let registry: Registry<Num> = Registry::new();
		assert!(registry.is_empty());
		assert_eq!(registry.first(), None);
		assert_eq!(registry.find(&Num(3)), None);
	}

	#[test]
	fn equal_values_resolve_to_the_same_entry() {
		let mut registry = Registry::new();
		let a = registry.lookup_or_insert(&Num(4)).unwrap();
		let b = registry.lookup_or_insert(&Num(9)).unwrap();
		let again = registry.lookup_or_insert(&Num(4)).unwrap();

		assert_eq!(a, again);
		assert_ne!(a, b);
		assert_eq!(registry.len(), 2);
		assert_eq!(registry.first(), Some(a));
		assert_eq!(registry.find(&Num(9)), Some(b));
	}

	#[test]
	fn terminal_states_are_not_counted_as_starts() {
		let mut registry = Registry::new();
		registry.lookup_or_insert(&Num(0)).unwrap();
		assert_eq!(registry.non_terminal_len(), 0);
		registry.lookup_or_insert(&Num(1)).unwrap();
		registry.lookup_or_insert(&Num(1)).unwrap();
		assert_eq!(registry.non_terminal_len(), 1);
		assert!(registry.get(EntryId(0)).unwrap().is_terminal());
	}

	proptest! {
		#[test]
		fn registry_size_matches_distinct_values(values in proptest::collection::vec(0u8..32, 0..200)) {
			let mut registry = Registry::new();
			for value in &values {
				registry.lookup_or_insert(&Num(*value)).unwrap();
			}

			let distinct: HashSet<u8> = values.iter().copied().collect();
			prop_assert_eq!(registry.len(), distinct.len());

			// Insertion order follows first appearance.
			let mut seen = Vec::new();
			for value in &values {
				if !seen.contains(value) {
					seen.push(*value);
				}
			}
			let stored: Vec<u8> = registry.iter().map(|(_, entry)| entry.state().0).collect();
			prop_assert_eq!(stored, seen);
		}

		#[test]
		fn sum_of_counts_matches_edges(pairs in proptest::collection::vec((0u8..8, 0u8..8), 0..300)) {
			let mut registry = Registry::new();
			for (from, to) in &pairs {
				let from = registry.lookup_or_insert(&Num(*from)).unwrap();
				let to = registry.lookup_or_insert(&Num(*to)).unwrap();
				registry.get_mut(from).unwrap().add_transition(to).unwrap();
			}

			for (_, entry) in registry.iter() {
				let total: u64 = entry.edges().iter().map(|edge| edge.count()).sum();
				prop_assert_eq!(entry.sum_of_counts(), total);

				let targets: HashSet<EntryId> = entry.edges().iter().map(|edge| edge.target()).collect();
				prop_assert_eq!(targets.len(), entry.edges().len());
			}
		}
	}
}
