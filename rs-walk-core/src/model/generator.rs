use std::io;

use log::debug;
use rand::Rng;

use super::chain::Chain;
use super::entry::EntryId;
use super::state::WalkState;
use super::walk_input::{StartState, WalkInput};
use crate::error::ChainError;

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEnd {
	/// A terminal state was rendered.
	Terminal,
	/// `max_steps` transitions were taken.
	LengthBound,
	/// The last state is not terminal but has no recorded successor.
	DeadEnd,
}

/// One generated sequence: the visited entries, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
	visited: Vec<EntryId>,
	end: WalkEnd,
}

impl Walk {
	pub fn visited(&self) -> &[EntryId] {
		&self.visited
	}

	pub fn len(&self) -> usize {
		self.visited.len()
	}

	/// Always false: a walk renders at least its start state.
	pub fn is_empty(&self) -> bool {
		self.visited.is_empty()
	}

	pub fn end(&self) -> WalkEnd {
		self.end
	}
}

impl<S: WalkState> Chain<S> {
	/// Generates one walk, rendering each visited state into `out`.
	///
	/// # Parameters
	/// - `start`: first entry, or `None` for a uniformly random
	///   non-terminal entry.
	/// - `max_steps`: maximum number of transitions taken.
	///
	/// # Behavior
	/// Each iteration renders the current state, then:
	/// - stops if the state is terminal (the terminal state is rendered),
	/// - stops if `max_steps` transitions were already taken,
	/// - otherwise moves to a frequency-weighted successor.
	///
	/// Between 1 and `max_steps + 1` states are rendered. A non-terminal
	/// state without successors ends the walk early.
	///
	/// # Errors
	/// - [`ChainError::UnknownEntry`] if `start` is not in the chain.
	/// - [`ChainError::NoNonTerminalState`] if `start` is `None` and no
	///   non-terminal state exists.
	/// - [`ChainError::Render`] if writing to `out` fails.
	pub fn generate<R: Rng, W: io::Write>(
		&self,
		rng: &mut R,
		start: Option<EntryId>,
		max_steps: usize,
		out: &mut W,
	) -> Result<Walk, ChainError> {
		let mut current = match start {
			Some(id) => id,
			None => self.pick_uniform_non_terminal(rng)?,
		};

		let mut visited = Vec::new();
		let mut steps_taken = 0;
		let end = loop {
			let entry = self.entry(current).ok_or(ChainError::UnknownEntry(current))?;
			entry.state().render(out)?;
			visited.push(current);

			if entry.is_terminal() {
				break WalkEnd::Terminal;
			}
			if steps_taken == max_steps {
				break WalkEnd::LengthBound;
			}

			match entry.pick_successor(rng) {
				Some(next) => current = next,
				None => {
					debug!("walk reached dead end at entry {current}");
					break WalkEnd::DeadEnd;
				}
			}
			steps_taken += 1;
		};

		debug!("walk of {} states ended: {:?}", visited.len(), end);
		Ok(Walk { visited, end })
	}

	/// Generates one walk configured by a [`WalkInput`].
	///
	/// # Errors
	/// Same as [`Chain::generate`], plus [`ChainError::EmptyChain`] when
	/// starting from the first state of an empty chain.
	pub fn walk<R: Rng, W: io::Write>(&self, rng: &mut R, input: &WalkInput, out: &mut W) -> Result<Walk, ChainError> {
		let start = match input.start {
			StartState::Random => None,
			StartState::First => Some(self.first().ok_or(ChainError::EmptyChain)?),
			StartState::Entry(id) => Some(id),
		};
		self.generate(rng, start, input.max_steps, out)
	}
}
