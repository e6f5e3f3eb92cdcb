use std::io;

use rs_walk_core::{Chain, ChainError, WalkState};

pub const BOARD_SIZE: u32 = 100;
pub const DICE_MAX: u32 = 6;

/// Ladders and snakes as `(from, to)` pairs: a ladder when `from < to`,
/// a snake otherwise.
pub const TRANSITIONS: [(u32, u32); 20] = [
	(13, 4),
	(85, 17),
	(95, 67),
	(97, 58),
	(66, 89),
	(87, 31),
	(57, 83),
	(91, 25),
	(28, 50),
	(35, 11),
	(8, 30),
	(41, 62),
	(81, 43),
	(69, 32),
	(20, 39),
	(33, 70),
	(79, 99),
	(23, 76),
	(15, 47),
	(61, 14),
];

/// A board cell, numbered from 1 to `BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
	number: u32,
	ladder_to: Option<u32>,
	snake_to: Option<u32>,
}

impl Cell {
	pub fn new(number: u32) -> Self {
		Self {
			number,
			ladder_to: None,
			snake_to: None,
		}
	}

	pub fn number(&self) -> u32 {
		self.number
	}

	/// Destination of this cell's ladder or snake, if any.
	pub fn jump(&self) -> Option<u32> {
		self.ladder_to.or(self.snake_to)
	}
}

impl WalkState for Cell {
	fn equals(&self, other: &Self) -> bool {
		self.number == other.number
	}

	fn duplicate(&self) -> Self {
		*self
	}

	fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
		if let Some(to) = self.ladder_to {
			return write!(out, "[{}]-ladder to {} -> ", self.number, to);
		}
		if let Some(to) = self.snake_to {
			return write!(out, "[{}]-snake to {} -> ", self.number, to);
		}
		if self.number == BOARD_SIZE {
			return write!(out, "[{}]", self.number);
		}
		write!(out, "[{}] -> ", self.number)
	}

	fn is_terminal(&self) -> bool {
		self.number == BOARD_SIZE
	}
}

/// Builds the board cells, in order, with their ladders and snakes.
pub fn create_board() -> Vec<Cell> {
	let mut cells: Vec<Cell> = (1..=BOARD_SIZE).map(Cell::new).collect();
	for (from, to) in TRANSITIONS {
		let cell = &mut cells[(from - 1) as usize];
		if from < to {
			cell.ladder_to = Some(to);
		} else {
			cell.snake_to = Some(to);
		}
	}
	cells
}

/// Registers every cell, then its moves.
///
/// A cell with a ladder or snake has a single move to its destination.
/// Any other cell moves to each of the next `DICE_MAX` cells on the board.
pub fn fill_chain(chain: &mut Chain<Cell>) -> Result<(), ChainError> {
	let cells = create_board();
	let ids = cells
		.iter()
		.map(|cell| chain.insert_state(cell))
		.collect::<Result<Vec<_>, _>>()?;
	let id_of = |number: u32| ids[(number - 1) as usize];

	for cell in &cells {
		let from = id_of(cell.number());
		if let Some(to) = cell.jump() {
			chain.record_transition(from, id_of(to))?;
			continue;
		}
		for roll in 1..=DICE_MAX {
			let to = cell.number() + roll;
			if to > BOARD_SIZE {
				break;
			}
			chain.record_transition(from, id_of(to))?;
		}
	}
	Ok(())
}
