mod corpus;
mod word;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_walk_core::{Chain, WalkInput};

/// Generates random tweets from a word corpus.
#[derive(Parser, Debug)]
#[command(name = "rs-walk-tweets", version)]
struct Cli {
	/// Seed of the pseudo-random generator
	seed: u64,

	/// Number of tweets to generate
	tweets: usize,

	/// Path to the text corpus
	corpus: PathBuf,

	/// Number of words to read from the corpus (whole file when omitted)
	words: Option<usize>,

	/// Maximum number of transitions per tweet
	#[arg(long, default_value_t = 20)]
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
	let read = corpus::load(&mut chain, &cli.corpus, cli.words)?;
	info!("read {read} words, {} distinct", chain.len());

	let input = WalkInput::new(cli.max_length);
	let mut out = BufWriter::new(io::stdout().lock());
	for i in 1..=cli.tweets {
		write!(out, "Tweet {i}: ")?;
		chain
			.walk(&mut rng, &input, &mut out)
			.with_context(|| format!("failed to generate tweet {i}"))?;
		writeln!(out)?;
	}
	out.flush()?;

	chain.destroy();
	Ok(())
}
