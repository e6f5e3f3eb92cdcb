use std::io;

/// Operations the engine needs from a state type.
///
/// The chain never inspects a state's contents directly. Identity,
/// copying, output, teardown and the end-of-walk test all go through
/// this trait, implemented once per application domain.
///
/// ## Contract
/// - `equals` is value equality and must be an equivalence relation.
/// - `duplicate` returns a copy owned independently of `self`.
/// - `is_terminal` must be stable for a given value: the registry caches
///   it when the state is inserted.
pub trait WalkState: Sized {
	/// Returns `true` if both states denote the same chain node.
	fn equals(&self, other: &Self) -> bool;

	/// Produces the copy stored by the registry.
	fn duplicate(&self) -> Self;

	/// Emits the state to the application's output channel.
	fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()>;

	/// Releases the state at chain teardown.
	///
	/// Called exactly once per stored state. The default simply drops it.
	fn dispose(self) {
		drop(self);
	}

	/// Returns `true` if a walk must stop after rendering this state.
	fn is_terminal(&self) -> bool;
}
