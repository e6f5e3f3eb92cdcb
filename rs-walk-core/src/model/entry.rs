use std::fmt;

use rand::Rng;

use crate::error::ChainError;

/// Index of an entry inside its registry.
///
/// Edges hold `EntryId`s instead of references, so an entry can point at
/// any other entry (itself included) without ownership cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
	/// Position of the entry in insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for EntryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Directed transition toward `target`, weighted by its observation count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	target: EntryId,
	count: u64,
}

impl Edge {
	pub fn target(&self) -> EntryId {
		self.target
	}

	pub fn count(&self) -> u64 {
		self.count
	}
}

/// Represents one unique state of the chain.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Own the registry's copy of the state
/// - Accumulate transition occurrences as they are observed
/// - Pick the next entry using weighted random sampling
///
/// ## Invariants
/// - At most one edge per distinct target
/// - Each edge count is strictly positive and never decreases
/// - `sum_of_counts` equals the sum of all edge counts
#[derive(Debug)]
pub struct Entry<S> {
	state: S,
	/// Cached `is_terminal` of `state`, computed once at insertion.
	terminal: bool,
	/// Outgoing edges in first-observed order.
	edges: Vec<Edge>,
	sum_of_counts: u64,
}

impl<S> Entry<S> {
	pub(crate) fn new(state: S, terminal: bool) -> Self {
		Self {
			state,
			terminal,
			edges: Vec::new(),
			sum_of_counts: 0,
		}
	}

	pub fn state(&self) -> &S {
		&self.state
	}

	pub fn is_terminal(&self) -> bool {
		self.terminal
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn sum_of_counts(&self) -> u64 {
		self.sum_of_counts
	}

	pub fn has_successors(&self) -> bool {
		!self.edges.is_empty()
	}

	/// Observation count of the edge toward `target`, 0 if never observed.
	pub fn count_to(&self, target: EntryId) -> u64 {
		self.edges
			.iter()
			.find(|edge| edge.target == target)
			.map_or(0, |edge| edge.count)
	}

	/// Records one occurrence of a transition toward `target`.
	///
	/// - If the edge already exists, its count is increased.
	/// - Otherwise, a new edge is appended with an initial count of 1.
	///
	/// # Errors
	/// Returns [`ChainError::Allocation`] if the edge list cannot grow.
	/// Existing edges are left untouched in that case.
	pub(crate) fn add_transition(&mut self, target: EntryId) -> Result<(), ChainError> {
		if let Some(edge) = self.edges.iter_mut().find(|edge| edge.target == target) {
			edge.count += 1;
			self.sum_of_counts += 1;
			return Ok(());
		}

		self.edges.try_reserve(1)?;
		self.edges.push(Edge { target, count: 1 });
		self.sum_of_counts += 1;
		Ok(())
	}

	/// Picks the next entry using weighted random sampling.
	///
	/// Draws `i` in `[0, sum_of_counts)` then walks the edges in insertion
	/// order, subtracting each count until `i` falls inside one. An edge
	/// observed `k` times is chosen with probability `k / sum_of_counts`.
	///
	/// Returns `None` if the entry has no edges.
	pub fn pick_successor<R: Rng>(&self, rng: &mut R) -> Option<EntryId> {
		if self.sum_of_counts == 0 {
			return None;
		}

		let mut i = rng.random_range(0..self.sum_of_counts);
		for edge in &self.edges {
			if i < edge.count {
				return Some(edge.target);
			}
			i -= edge.count;
		}

		// Unreachable while `sum_of_counts` matches the edge counts.
		None
	}

	pub(crate) fn into_state(self) -> S {
		self.state
	}
}
