use super::weights::WeightTable;

/// Everything learned about one distinct word of the corpus.
///
/// Conceptually a node of the Markov chain with two sets of outgoing
/// edges: words seen right after it, and words seen two positions after it.
///
/// ## Invariants
/// - Both successor tables only contain words that are themselves recorded
///   in the owning model
/// - Successor totals are maintained by `WeightTable` on every insert
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRecord {
	/// Words observed immediately after this token.
	successors1: WeightTable,
	/// Words observed two positions after this token (one word in between).
	successors2: WeightTable,
	/// Times this word was observed. Informational only.
	occurrences: usize,
}

impl TokenRecord {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn successors1(&self) -> &WeightTable {
		&self.successors1
	}

	pub fn successors2(&self) -> &WeightTable {
		&self.successors2
	}

	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// A token with no direct successor ends any sentence it appears in.
	pub fn is_dead_end(&self) -> bool {
		self.successors1.is_empty()
	}

	pub(crate) fn observe(&mut self) {
		self.occurrences += 1;
	}

	pub(crate) fn add_successor1(&mut self, word: &str) {
		self.successors1.increment(word);
	}

	pub(crate) fn add_successor2(&mut self, word: &str) {
		self.successors2.increment(word);
	}

	/// Merges another record of the same word into this one.
	pub(crate) fn merge(&mut self, other: &Self) {
		self.successors1.merge(&other.successors1);
		self.successors2.merge(&other.successors2);
		self.occurrences += other.occurrences;
	}
}
