//! Corpus tokenizer.
//!
//! Splits raw text on whitespace and cleans each token before it reaches the
//! model:
//! - tokens containing a digit are dropped
//! - the first `(` or `)` character is removed
//! - tokens containing `.`, `!` or `?` are flagged as sentence ends
//!
//! Punctuation other than the removed parenthesis is kept verbatim, so
//! `fast.` is stored and generated as `fast.`.

/// A cleaned word together with its sentence-boundary flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	pub word: String,
	/// `true` when the raw token closed a sentence.
	pub end: bool,
}

impl Token {
	pub fn new(word: &str, end: bool) -> Self {
		Self { word: word.to_owned(), end }
	}
}

const END_CHARS: [char; 3] = ['.', '!', '?'];
const PARENS: [char; 2] = ['(', ')'];

/// Cleans a single raw token.
///
/// Returns `None` when the token must be skipped: it contains a numeral, or
/// nothing is left once the parenthesis is removed.
///
/// # Notes
/// - Only one parenthesis is removed. `(word)` becomes `word)`, and
///   `(a)b` becomes `a)b`. This is literal character removal, not
///   balanced-paren parsing.
/// - A lone `(` or `)` leaves nothing and is dropped like a numeral token.
///   It is not stored as an empty word, so it does not end the chain: the
///   word after it still follows the word before it.
/// - The end flag is computed on the raw text.
pub fn preprocess(raw: &str) -> Option<Token> {
	if raw.chars().any(|c| c.is_ascii_digit()) {
		return None;
	}

	let word = match raw.find(PARENS) {
		Some(i) => {
			// Both parens are one byte wide
			let mut s = String::with_capacity(raw.len() - 1);
			s.push_str(&raw[..i]);
			s.push_str(&raw[i + 1..]);
			s
		}
		None => raw.to_owned(),
	};

	if word.is_empty() {
		return None;
	}

	Some(Token { word, end: raw.contains(END_CHARS) })
}

/// Lazily yields every accepted token of `text`, in order.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token> + '_ {
	text.split_whitespace().filter_map(preprocess)
}

/// Groups tokens into sentences.
///
/// Each segment ends right after a token flagged `end`. The final segment
/// may have no end token if the text stops mid-sentence.
pub fn split_sentences<I>(tokens: I) -> Vec<Vec<Token>>
where
	I: IntoIterator<Item = Token>,
{
	let mut sentences = Vec::new();
	let mut current = Vec::new();

	for token in tokens {
		let end = token.end;
		current.push(token);
		if end {
			sentences.push(std::mem::take(&mut current));
		}
	}
	if !current.is_empty() {
		sentences.push(current);
	}

	sentences
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numerals_are_skipped() {
		assert_eq!(preprocess("1999"), None);
		assert_eq!(preprocess("abc3"), None);
		assert_eq!(preprocess("4."), None);
	}

	#[test]
	fn only_first_paren_is_removed() {
		assert_eq!(preprocess("(word").unwrap().word, "word");
		assert_eq!(preprocess("word)").unwrap().word, "word");
		assert_eq!(preprocess("(word)").unwrap().word, "word)");
		assert_eq!(preprocess("(a)b").unwrap().word, "a)b");
		assert_eq!(preprocess("("), None);
	}

	#[test]
	fn end_flag_uses_raw_text() {
		assert!(preprocess("fast.").unwrap().end);
		assert!(preprocess("what?").unwrap().end);
		assert!(preprocess("(wow!)").unwrap().end);
		assert!(preprocess("e.g").unwrap().end);
		assert!(!preprocess("plain").unwrap().end);
	}

	#[test]
	fn punctuation_is_kept() {
		let token = preprocess("loud.").unwrap();
		assert_eq!(token, Token::new("loud.", true));
	}

	#[test]
	fn tokenize_splits_on_any_whitespace() {
		let words: Vec<String> = tokenize("one\ttwo  three\nfour 5 six.")
			.map(|t| t.word)
			.collect();
		assert_eq!(words, vec!["one", "two", "three", "four", "six."]);
	}

	#[test]
	fn sentences_are_cut_after_end_tokens() {
		let sentences = split_sentences(tokenize("a b. c! d e"));
		assert_eq!(sentences.len(), 3);
		assert_eq!(sentences[0].len(), 2);
		assert_eq!(sentences[1], vec![Token::new("c!", true)]);
		assert_eq!(sentences[2].len(), 2);
		assert!(split_sentences(tokenize("   ")).is_empty());
	}
}
