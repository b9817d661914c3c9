use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::frequency_model::FrequencyModel;
use super::generation_input::GenerationInput;
use super::weights::WeightTable;
use crate::error::{Error, Result};

/// How the next word of a sentence is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepMode {
	/// Blend the successors of the previous word with the skip-one successors
	/// of the word before it. Degrades to order-1 while no such word exists.
	OrderTwo,
	/// The last order-2 attempt found no convergence: draw from the previous
	/// word's direct successors only, then go back to `OrderTwo`.
	OrderOneForced,
}

/// Outcome of a single generation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<'a> {
	/// A word was drawn.
	Word(&'a str),
	/// No word is supported by both contexts; retry with `OrderOneForced`.
	Fallback,
	/// The previous word has no direct successor: the sentence is over.
	DeadEnd,
}

/// Sentence generator reading a `FrequencyModel`.
///
/// # Responsibilities
/// - Pick sentence starts from the start-word table
/// - Walk the model with order-2 steps, falling back to order-1 for one step
///   when the two contexts share no candidate
/// - Assemble sentences into the output text
///
/// The model is borrowed, never modified, so any number of generators can
/// read the same model.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	model: &'a FrequencyModel,
}

impl<'a> Generator<'a> {
	pub fn new(model: &'a FrequencyModel) -> Self {
		Self { model }
	}

	/// Computes one step of the walk.
	///
	/// # Parameters
	/// - `prev1`: the last word of the sentence
	/// - `prev2`: the word before it, `None` right after the start word
	/// - `mode`: `OrderOneForced` after a `Step::Fallback`
	///
	/// # Behavior
	/// - Order-1 (no `prev2`, or forced): draws from `prev1`'s direct
	///   successors, `DeadEnd` if there are none.
	/// - Order-2: draws from the convergence set of `prev1`'s direct successors
	///   and `prev2`'s skip-one successors, `Fallback` if the set is empty.
	pub fn next_step<R: Rng>(
		&self,
		prev1: &str,
		prev2: Option<&str>,
		mode: StepMode,
		rng: &mut R,
	) -> Step<'a> {
		let model = self.model;
		let Some(record1) = model.token(prev1) else {
			return Step::DeadEnd;
		};

		let prev2 = match (prev2, mode) {
			(Some(p2), StepMode::OrderTwo) => p2,
			_ => {
				return match record1.successors1().sample(rng) {
					Some(word) => Step::Word(word),
					None => Step::DeadEnd,
				};
			}
		};

		let empty = WeightTable::new();
		let successors2 = model.token(prev2).map_or(&empty, |r| r.successors2());
		let convergence = WeightTable::converge(record1.successors1(), successors2);

		match convergence.sample(rng).and_then(|word| model.word(word)) {
			Some(word) => Step::Word(word),
			None => {
				trace!("No convergence after '{prev2} {prev1}', falling back to order-1");
				Step::Fallback
			}
		}
	}

	/// Generates the words of one sentence.
	///
	/// The walk stops after a word with no direct successor, or once
	/// `max_words` words were produced.
	///
	/// # Errors
	/// Returns `Error::EmptyModel` if the model has no start word.
	pub fn sentence<R: Rng>(&self, rng: &mut R, max_words: Option<usize>) -> Result<Vec<&'a str>> {
		let start = self.model.start_words().sample(rng).ok_or(Error::EmptyModel)?;

		let mut words = vec![start];
		let mut prev1 = start;
		let mut prev2: Option<&'a str> = None;
		let mut mode = StepMode::OrderTwo;

		while max_words.is_none_or(|max| words.len() < max) {
			match self.next_step(prev1, prev2, mode, rng) {
				Step::Word(word) => {
					words.push(word);
					prev2 = Some(prev1);
					prev1 = word;
					mode = StepMode::OrderTwo;
					if self.model.token(word).is_none_or(|r| r.is_dead_end()) {
						break;
					}
				}
				Step::Fallback => mode = StepMode::OrderOneForced,
				Step::DeadEnd => break,
			}
		}

		Ok(words)
	}

	/// Generates `sentence_count` sentences.
	///
	/// Each sentence is its words joined by a space, followed by `\n`.
	///
	/// # Errors
	/// Returns `Error::EmptyModel` if the model has no start word, even when
	/// `sentence_count` is 0.
	pub fn generate<R: Rng>(
		&self,
		sentence_count: usize,
		max_words: Option<usize>,
		rng: &mut R,
	) -> Result<String> {
		if self.model.start_words().is_empty() {
			return Err(Error::EmptyModel);
		}

		let mut output = String::new();
		for _ in 0..sentence_count {
			output.push_str(&self.sentence(rng, max_words)?.join(" "));
			output.push('\n');
		}

		debug!("Generated {sentence_count} sentences");
		Ok(output)
	}

	/// Runs a whole generation described by `input`.
	///
	/// Uses a `StdRng` seeded with `input.seed` when set, the thread RNG
	/// otherwise.
	pub fn predict(&self, input: &GenerationInput) -> Result<String> {
		match input.seed {
			Some(seed) => {
				let mut rng = StdRng::seed_from_u64(seed);
				self.generate(input.sentence_count, input.max_words(), &mut rng)
			}
			None => self.generate(input.sentence_count, input.max_words(), &mut rand::rng()),
		}
	}
}
