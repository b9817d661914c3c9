use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use super::token_record::TokenRecord;
use super::weights::WeightTable;
use crate::error::Result;
use crate::io::read_file;
use crate::tokenizer::{Token, split_sentences, tokenize};

/// Statistical model of a corpus: which words follow which.
///
/// This struct holds:
/// - `dictionary`: one `TokenRecord` per distinct word
/// - `start_words`: how many times each word began a sentence
///
/// The model is built once from a token stream and only read afterwards.
///
/// # Invariants
/// - Every word of any successor table or of `start_words` is a key of
///   `dictionary`
/// - Weights are strictly positive and every cached total matches its table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyModel {
	dictionary: HashMap<String, TokenRecord>,
	start_words: WeightTable,
}

impl FrequencyModel {
	/// Builds a model from an ordered stream of cleaned tokens.
	///
	/// # Behavior
	/// For each token `w`:
	/// - its record is created if needed and its occurrence count increased
	/// - the word one step back gains `w` as a direct successor, or `w`
	///   becomes a start word if there is none
	/// - the word two steps back gains `w` as a skip-one successor
	/// - an end token clears both lookback cursors, otherwise they shift
	pub fn from_tokens<I>(tokens: I) -> Self
	where
		I: IntoIterator<Item = Token>,
	{
		let mut model = Self::default();

		// (one step back, two steps back)
		let mut prev1: Option<String> = None;
		let mut prev2: Option<String> = None;
		let mut count = 0usize;

		for Token { word, end } in tokens {
			count += 1;
			model.dictionary.entry(word.clone()).or_default().observe();

			match &prev1 {
				Some(p1) => model.record_mut(p1).add_successor1(&word),
				None => model.start_words.increment(&word),
			}
			if let Some(p2) = &prev2 {
				model.record_mut(p2).add_successor2(&word);
			}

			if end {
				prev1 = None;
				prev2 = None;
			} else {
				prev2 = prev1.replace(word);
			}
		}

		debug!(
			"Ingested {count} tokens, {} distinct words, {} sentence starts",
			model.dictionary.len(),
			model.start_words.total()
		);
		model
	}

	/// Tokenizes `text` and builds the model sequentially.
	pub fn from_text(text: &str) -> Self {
		Self::from_tokens(tokenize(text))
	}

	/// Tokenizes `text` and builds the model on several threads.
	///
	/// # Behavior
	/// - Splits the token stream into sentences.
	/// - Splits sentences into chunks (`workers` chunks, or CPU cores * factor
	///   when `workers` is 0).
	/// - Spawns threads to build partial models for each chunk.
	/// - Merges all partial models sequentially.
	///
	/// # Notes
	/// - Chunks are only cut at sentence boundaries, where both lookback
	///   cursors are empty, so the result equals `from_text`.
	/// - Uses MPSC channels to collect models from threads.
	pub fn from_text_parallel(text: &str, workers: usize) -> Self {
		let sentences = split_sentences(tokenize(text));
		if sentences.is_empty() {
			return Self::default();
		}

		let chunks = if workers == 0 { num_cpus::get() * 8 } else { workers };
		let chunk_size = sentences.len().div_ceil(chunks);
		debug!("Learning {} sentences in chunks of {chunk_size}", sentences.len());

		let (tx, rx) = mpsc::channel();
		for chunk in sentences.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<Token> = chunk.iter().flatten().cloned().collect();

			thread::spawn(move || {
				let partial_model = FrequencyModel::from_tokens(chunk);
				tx.send(partial_model).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut final_model = FrequencyModel::default();
		for partial_model in rx.iter() {
			final_model.merge(&partial_model);
		}
		final_model
	}

	/// Reads a corpus file and builds its model.
	///
	/// `workers == 1` learns sequentially on the calling thread; any other
	/// value is forwarded to `from_text_parallel`.
	///
	/// # Errors
	/// Returns an error if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P, workers: usize) -> Result<Self> {
		let text = read_file(&filepath)?;
		let model = if workers == 1 {
			Self::from_text(&text)
		} else {
			Self::from_text_parallel(&text, workers)
		};
		info!(
			"Learned {} words from {}",
			model.len(),
			filepath.as_ref().display()
		);
		Ok(model)
	}

	/// Merges another model into this one.
	///
	/// Occurrence counts, successor weights and start-word weights are summed.
	/// Records missing from `self` are cloned.
	pub fn merge(&mut self, other: &Self) {
		for (word, record) in &other.dictionary {
			if let Some(existing) = self.dictionary.get_mut(word) {
				existing.merge(record);
			} else {
				self.dictionary.insert(word.clone(), record.clone());
			}
		}
		self.start_words.merge(&other.start_words);
	}

	/// Returns the record of `word`, if it was ever observed.
	pub fn token(&self, word: &str) -> Option<&TokenRecord> {
		self.dictionary.get(word)
	}

	pub fn start_words(&self) -> &WeightTable {
		&self.start_words
	}

	/// Iterates over every recorded word and its record.
	pub fn words(&self) -> impl Iterator<Item = (&str, &TokenRecord)> {
		self.dictionary.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.dictionary.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dictionary.is_empty()
	}

	/// Returns the model's own copy of `word`.
	pub(crate) fn word(&self, word: &str) -> Option<&str> {
		self.dictionary.get_key_value(word).map(|(k, _)| k.as_str())
	}

	/// Record of a word already inserted during ingestion.
	fn record_mut(&mut self, word: &str) -> &mut TokenRecord {
		// Cursors only ever hold words recorded earlier in the same pass
		self.dictionary.entry(word.to_owned()).or_default()
	}
}
