mod board;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_walk_core::{Chain, StartState, WalkInput};

/// Simulates random snakes-and-ladders routes from the first cell.
#[derive(Parser, Debug)]
#[command(name = "rs-walk-board", version)]
struct Cli {
	/// Seed of the pseudo-random generator
	seed: u64,

	/// Number of routes to generate
	routes: usize,

	/// Maximum number of moves per route
	#[arg(long, default_value_t = 60)]
	max_length: usize,
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let cli = Cli::parse();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<()> {
	let mut rng = StdRng::seed_from_u64(cli.seed);

	let mut chain = Chain::new();
	board::fill_chain(&mut chain).context("failed to build the board")?;
	info!("board chain holds {} cells", chain.len());

	let input = WalkInput::new(cli.max_length).starting_at(StartState::First);
	let mut out = BufWriter::new(io::stdout().lock());
	for i in 1..=cli.routes {
		write!(out, "Random Walk {i}: ")?;
		let walk = chain
			.walk(&mut rng, &input, &mut out)
			.with_context(|| format!("failed to generate route {i}"))?;
		writeln!(out)?;
		info!("route {i}: {} cells, {:?}", walk.len(), walk.end());
	}
	out.flush()?;

	chain.destroy();
	Ok(())
}
