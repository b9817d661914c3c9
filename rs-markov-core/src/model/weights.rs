use std::collections::BTreeMap;

use rand::Rng;

/// A table of words weighted by how many times they were observed.
///
/// Used for both successor tables of a token and for the start-word table.
///
/// ## Invariants
/// - Every weight is strictly positive (absence means zero)
/// - `total` always equals the sum of the weights
///
/// Entries are kept in a `BTreeMap` so iteration, and therefore sampling with
/// a seeded RNG, does not depend on hashing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightTable {
	weights: BTreeMap<String, usize>,
	total: usize,
}

impl WeightTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `weight` occurrences of `word`.
	///
	/// A zero weight is ignored to keep the table free of zero entries.
	pub fn add(&mut self, word: &str, weight: usize) {
		if weight == 0 {
			return;
		}
		match self.weights.get_mut(word) {
			Some(w) => *w += weight,
			None => {
				self.weights.insert(word.to_owned(), weight);
			}
		}
		self.total += weight;
	}

	/// Records one more occurrence of `word`.
	pub fn increment(&mut self, word: &str) {
		self.add(word, 1);
	}

	/// Weight of `word`, 0 if absent.
	pub fn get(&self, word: &str) -> usize {
		self.weights.get(word).copied().unwrap_or(0)
	}

	pub fn contains(&self, word: &str) -> bool {
		self.weights.contains_key(word)
	}

	/// Sum of all weights.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.weights.len()
	}

	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.weights.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Sums the weights of `other` into this table.
	pub fn merge(&mut self, other: &Self) {
		for (word, weight) in other.iter() {
			self.add(word, weight);
		}
	}

	/// Builds the convergence set of two tables.
	///
	/// Keeps every word present in both, weighted by the sum of its two
	/// weights. The smaller table is scanned and probed against the larger.
	pub fn converge(a: &Self, b: &Self) -> Self {
		let (shortlist, longlist) = if a.len() < b.len() { (a, b) } else { (b, a) };

		let mut convergence = Self::new();
		for (word, weight) in shortlist.iter() {
			let other = longlist.get(word);
			if other > 0 {
				convergence.add(word, weight + other);
			}
		}
		convergence
	}

	/// Draws a word with probability proportional to its weight.
	///
	/// A cumulative-weight array is built over the entries and a uniform draw
	/// in `[0, total)` is located by binary search.
	///
	/// Returns `None` if the table is empty.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.total == 0 {
			return None;
		}

		let mut cumulative = Vec::with_capacity(self.weights.len());
		let mut acc = 0;
		for weight in self.weights.values() {
			acc += weight;
			cumulative.push(acc);
		}

		let r = rng.random_range(0..self.total);
		// First bucket whose upper bound is above r
		let index = cumulative.partition_point(|&upper| upper <= r);
		self.weights.keys().nth(index).map(String::as_str)
	}
}
