use super::entry::EntryId;

/// Strategy used to select the first state of a walk.
///
/// # Variants
/// - `Random`: a uniformly random non-terminal state.
/// - `First`: the first state ever registered in the chain.
/// - `Entry(EntryId)`: a caller-chosen entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartState {
	#[default]
	Random,
	First,
	Entry(EntryId),
}

/// Input parameters for generating a walk.
///
/// # Notes
/// - A walk renders at most `max_steps + 1` states.
/// - `max_steps >= 1` is needed for a walk that does not start on a
///   terminal state to render at least two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkInput {
	/// Maximum number of transitions taken after the start state.
	pub max_steps: usize,

	/// How the start state is chosen.
	pub start: StartState,
}

impl WalkInput {
	/// Creates an input starting from a random non-terminal state.
	pub fn new(max_steps: usize) -> Self {
		Self {
			max_steps,
			start: StartState::Random,
		}
	}

	/// Returns the same input with another start strategy.
	pub fn starting_at(mut self, start: StartState) -> Self {
		self.start = start;
		self
	}
}
