use std::io;

use rs_walk_core::WalkState;

/// One corpus word. A word ending with `.` closes a tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}
}

impl WalkState for Word {
	fn equals(&self, other: &Self) -> bool {
		self.0 == other.0
	}

	fn duplicate(&self) -> Self {
		self.clone()
	}

	fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
		write!(out, "{} ", self.0)
	}

	fn is_terminal(&self) -> bool {
		self.0.ends_with('.')
	}
}
