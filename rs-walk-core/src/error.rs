use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::model::entry::EntryId;

/// Errors raised by chain construction, sampling and generation.
#[derive(Debug, Error)]
pub enum ChainError {
	/// A container (registry or edge list) could not grow.
	/// The chain is left exactly as it was before the call.
	#[error("allocation failure: {0}")]
	Allocation(#[from] TryReserveError),

	#[error("no entry {0} in the registry")]
	UnknownEntry(EntryId),

	/// Weighted sampling was requested on an entry without outgoing edges.
	#[error("entry {0} has no recorded successor")]
	NoSuccessor(EntryId),

	#[error("registry holds no non-terminal state to start a walk from")]
	NoNonTerminalState,

	#[error("chain is empty")]
	EmptyChain,

	#[error("failed to render state: {0}")]
	Render(#[from] io::Error),
}
