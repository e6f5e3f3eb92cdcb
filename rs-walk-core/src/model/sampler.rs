use rand::Rng;

use super::entry::EntryId;
use super::registry::Registry;
use super::state::WalkState;
use crate::error::ChainError;

impl<S: WalkState> Registry<S> {
	/// Picks a uniformly random non-terminal entry.
	///
	/// Rejection sampling: draw an index in `[0, len)` and redraw while the
	/// entry is terminal. The loop only starts once at least one
	/// non-terminal entry is known to exist, so it terminates with
	/// probability 1.
	///
	/// # Errors
	/// Returns [`ChainError::NoNonTerminalState`] if the registry is empty
	/// or every entry is terminal.
	pub fn pick_uniform_non_terminal<R: Rng>(&self, rng: &mut R) -> Result<EntryId, ChainError> {
		if self.non_terminal == 0 {
			return Err(ChainError::NoNonTerminalState);
		}

		loop {
			let index = rng.random_range(0..self.entries.len());
			if !self.entries[index].is_terminal() {
				return Ok(EntryId(index));
			}
		}
	}

	/// Picks a successor of `source` with probability proportional to the
	/// number of times that transition was observed.
	///
	/// # Errors
	/// - [`ChainError::UnknownEntry`] if `source` is not in the registry.
	/// - [`ChainError::NoSuccessor`] if `source` has no outgoing edges.
	pub fn pick_weighted_successor<R: Rng>(&self, rng: &mut R, source: EntryId) -> Result<EntryId, ChainError> {
		let entry = self.get(source).ok_or(ChainError::UnknownEntry(source))?;
		entry.pick_successor(rng).ok_or(ChainError::NoSuccessor(source))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::io;

	#[derive(Debug, Clone, PartialEq)]
	struct Tag(&'static str);

	impl WalkState for Tag {
		fn equals(&self, other: &Self) -> bool {
			self.0 == other.0
		}

		fn duplicate(&self) -> Self {
			self.clone()
		}

		fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
			out.write_all(self.0.as_bytes())
		}

		fn is_terminal(&self) -> bool {
			self.0.ends_with('.')
		}
	}

	#[test]
	fn uniform_pick_rejects_all_terminal_registry() {
		let mut registry = Registry::new();
		let mut rng = StdRng::seed_from_u64(3);
		assert!(matches!(
			registry.pick_uniform_non_terminal(&mut rng),
			Err(ChainError::NoNonTerminalState)
		));

		registry.lookup_or_insert(&Tag("end.")).unwrap();
		registry.lookup_or_insert(&Tag("stop.")).unwrap();
		assert!(matches!(
			registry.pick_uniform_non_terminal(&mut rng),
			Err(ChainError::NoNonTerminalState)
		));
	}

	#[test]
	fn uniform_pick_never_returns_terminal() {
		let mut registry = Registry::new();
		for tag in ["a", "b.", "c", "d.", "e."] {
			registry.lookup_or_insert(&Tag(tag)).unwrap();
		}

		let mut rng = StdRng::seed_from_u64(11);
		let mut seen = [false; 5];
		for _ in 0..500 {
			let id = registry.pick_uniform_non_terminal(&mut rng).unwrap();
			assert!(!registry.get(id).unwrap().is_terminal());
			seen[id.index()] = true;
		}
		assert_eq!(seen, [true, false, true, false, false]);
	}

	#[test]
	fn weighted_pick_rejects_entry_without_edges() {
		let mut registry = Registry::new();
		let last = registry.lookup_or_insert(&Tag("100.")).unwrap();
		let mut rng = StdRng::seed_from_u64(5);

		assert!(matches!(
			registry.pick_weighted_successor(&mut rng, last),
			Err(ChainError::NoSuccessor(id)) if id == last
		));
		assert!(matches!(
			registry.pick_weighted_successor(&mut rng, EntryId(9)),
			Err(ChainError::UnknownEntry(_))
		));
	}
}
