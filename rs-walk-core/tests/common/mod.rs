use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use rs_walk_core::WalkState;

/// Word state recording every dispose call into a shared log.
#[derive(Debug, Clone)]
pub struct TrackedWord {
	pub text: String,
	pub disposed: Rc<RefCell<Vec<String>>>,
}

impl WalkState for TrackedWord {
	fn equals(&self, other: &Self) -> bool {
		self.text == other.text
	}

	fn duplicate(&self) -> Self {
		self.clone()
	}

	fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
		write!(out, "{} ", self.text)
	}

	fn dispose(self) {
		self.disposed.borrow_mut().push(self.text);
	}

	fn is_terminal(&self) -> bool {
		self.text.ends_with('.')
	}
}

/// Builds words sharing one dispose log.
#[derive(Default)]
pub struct Corpus {
	pub disposed: Rc<RefCell<Vec<String>>>,
}

impl Corpus {
	pub fn word(&self, text: &str) -> TrackedWord {
		TrackedWord {
			text: text.to_owned(),
			disposed: Rc::clone(&self.disposed),
		}
	}

	pub fn disposed(&self) -> Vec<String> {
		self.disposed.borrow().clone()
	}
}
