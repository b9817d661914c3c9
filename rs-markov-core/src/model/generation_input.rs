use crate::error::{Error, Result};

/// Input parameters for a generation run.
///
/// # Responsibilities
/// - Track how many sentences to produce
/// - Optionally cap the length of a single sentence
/// - Optionally fix the RNG seed for reproducible output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of sentences to generate. 0 yields an empty output.
	pub sentence_count: usize,

	/// Seed for a deterministic RNG. `None` uses the thread RNG.
	pub seed: Option<u64>,

	/// Maximum number of words in one sentence. `None` means unbounded.
	max_words: Option<usize>,
}

impl GenerationInput {
	/// Creates an input generating `sentence_count` sentences, unseeded and
	/// without a length cap.
	pub fn new(sentence_count: usize) -> Self {
		Self { sentence_count, seed: None, max_words: None }
	}

	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets the per-sentence word cap.
	///
	/// Without a cap, a corpus whose chains loop without ever reaching a
	/// dead end can generate forever.
	///
	/// # Errors
	/// Returns an error for `Some(0)`: every sentence holds its start word.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> Result<()> {
		if max_words == Some(0) {
			return Err(Error::InvalidInput("max_words must be at least 1".to_owned()));
		}
		self.max_words = max_words;
		Ok(())
	}
}

impl Default for GenerationInput {
	/// Three sentences, like the command line default.
	fn default() -> Self {
		Self::new(3)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_word_cap_is_rejected() {
		let mut input = GenerationInput::new(2);
		assert!(input.set_max_words(Some(0)).is_err());
		assert_eq!(input.max_words(), None);

		input.set_max_words(Some(12)).unwrap();
		assert_eq!(input.max_words(), Some(12));
		input.set_max_words(None).unwrap();
		assert_eq!(input.max_words(), None);
	}
}
