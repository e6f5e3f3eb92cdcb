use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use rs_walk_core::Chain;

use crate::word::Word;

/// Splits a corpus line into words on spaces and line breaks.
pub(crate) fn tokens(line: &str) -> impl Iterator<Item = &str> {
	line.split([' ', '\r', '\n']).filter(|token| !token.is_empty())
}

/// Feeds a corpus into the chain.
///
/// - Every word is registered.
/// - A transition is recorded between consecutive words of the same line.
/// - Reading stops after `limit` words when given (`Some(0)` reads nothing).
///
/// Returns the number of words read.
pub fn fill_chain<B: BufRead>(chain: &mut Chain<Word>, reader: B, limit: Option<usize>) -> Result<usize> {
	let mut count = 0;
	if limit == Some(0) {
		return Ok(count);
	}

	for (number, line) in reader.lines().enumerate() {
		let line = line.with_context(|| format!("failed to read corpus line {}", number + 1))?;
		let mut previous = None;
		for token in tokens(&line) {
			let current = chain.insert_state(&Word::new(token))?;
			if let Some(previous) = previous {
				chain.record_transition(previous, current)?;
			}
			previous = Some(current);

			count += 1;
			if limit == Some(count) {
				debug!("word limit {count} reached at line {}", number + 1);
				return Ok(count);
			}
		}
	}

	Ok(count)
}

/// Opens the corpus at `path` and feeds it into the chain.
pub fn load<P: AsRef<Path>>(chain: &mut Chain<Word>, path: P, limit: Option<usize>) -> Result<usize> {
	let path = path.as_ref();
	let file = File::open(path).with_context(|| format!("cannot open corpus {}", path.display()))?;
	fill_chain(chain, BufReader::new(file), limit)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn tokens_skip_empty_fields() {
		let words: Vec<_> = tokens("  hello  world.\r").collect();
		assert_eq!(words, vec!["hello", "world."]);
	}

	#[test]
	fn transitions_do_not_cross_lines() {
		let mut chain = Chain::new();
		let read = fill_chain(&mut chain, Cursor::new("a b\nc a\n"), None).unwrap();
		assert_eq!(read, 4);
		assert_eq!(chain.len(), 3);

		let a = chain.find(&Word::new("a")).unwrap();
		let b = chain.find(&Word::new("b")).unwrap();
		let c = chain.find(&Word::new("c")).unwrap();
		assert_eq!(chain.entry(a).unwrap().count_to(b), 1);
		assert_eq!(chain.entry(b).unwrap().sum_of_counts(), 0);
		assert_eq!(chain.entry(c).unwrap().count_to(a), 1);
	}

	#[test]
	fn word_limit_stops_reading() {
		let mut chain = Chain::new();
		let read = fill_chain(&mut chain, Cursor::new("one two three four."), Some(2)).unwrap();
		assert_eq!(read, 2);
		assert_eq!(chain.len(), 2);
		assert!(chain.find(&Word::new("three")).is_none());
	}

	#[test]
	fn zero_limit_reads_nothing() {
		let mut chain = Chain::new();
		let read = fill_chain(&mut chain, Cursor::new("one two."), Some(0)).unwrap();
		assert_eq!(read, 0);
		assert!(chain.is_empty());
	}

	#[test]
	fn missing_corpus_is_reported() {
		let mut chain = Chain::new();
		let err = load(&mut chain, "does/not/exist.txt", None).unwrap_err();
		assert!(err.to_string().contains("cannot open corpus"));
	}
}
