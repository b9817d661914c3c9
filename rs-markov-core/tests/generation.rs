use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::model::{FrequencyModel, GenerationInput, Generator};
use rs_markov_core::tokenizer::tokenize;
use rs_markov_core::Error;

const CORPUS: &str = "The quick brown fox jumps over the lazy dog. The dog sleeps! \
	Does the fox (really) care? The lazy fox sleeps over the brown dog. \
	In 2020 the quick dog jumps. A fox and a dog play over the hill.";

#[test]
fn dogs_end_to_end() {
	let model = FrequencyModel::from_text("Dogs run fast. Dogs bark loud.");
	let generator = Generator::new(&model);

	for seed in 0..20 {
		let mut rng = StdRng::seed_from_u64(seed);
		let output = generator.generate(1, None, &mut rng).unwrap();
		assert!(
			output == "Dogs run fast.\n" || output == "Dogs bark loud.\n",
			"unexpected output {output:?}"
		);
	}
}

#[test]
fn both_dogs_sentences_are_reachable() {
	let model = FrequencyModel::from_text("Dogs run fast. Dogs bark loud.");
	let generator = Generator::new(&model);
	let mut rng = StdRng::seed_from_u64(5);
	let output = generator.generate(200, None, &mut rng).unwrap();
	assert!(output.lines().any(|l| l == "Dogs run fast."));
	assert!(output.lines().any(|l| l == "Dogs bark loud."));
}

#[test]
fn model_invariants_hold_on_a_real_corpus() {
	let model = FrequencyModel::from_text(CORPUS);
	assert!(model.token("2020").is_none());
	assert!(model.token("really)").is_some());

	for (_, record) in model.words() {
		for table in [record.successors1(), record.successors2()] {
			assert_eq!(table.total(), table.iter().map(|(_, w)| w).sum::<usize>());
			assert!(table.iter().all(|(word, weight)| weight > 0 && model.token(word).is_some()));
		}
	}
	assert!(model.start_words().iter().all(|(word, _)| model.token(word).is_some()));

	let occurrences: usize = model.words().map(|(_, r)| r.occurrences()).sum();
	assert_eq!(occurrences, tokenize(CORPUS).count());
}

#[test]
fn generated_words_come_from_the_corpus() {
	let model = FrequencyModel::from_text(CORPUS);
	let generator = Generator::new(&model);
	let mut input = GenerationInput::new(25);
	input.seed = Some(11);
	input.set_max_words(Some(50)).unwrap();

	let output = generator.predict(&input).unwrap();
	assert_eq!(output.lines().count(), 25);
	for line in output.lines() {
		let mut words = line.split(' ');
		let first = words.next().unwrap();
		assert!(model.start_words().contains(first), "{first} is not a start word");
		for word in words {
			assert!(model.token(word).is_some(), "{word} is not in the corpus");
		}
	}
}

#[test]
fn parallel_model_generates_like_sequential() {
	let sequential = FrequencyModel::from_text(CORPUS);
	let parallel = FrequencyModel::from_text_parallel(CORPUS, 0);
	assert_eq!(sequential, parallel);

	let mut input = GenerationInput::new(5);
	input.seed = Some(3);
	assert_eq!(
		Generator::new(&sequential).predict(&input).unwrap(),
		Generator::new(&parallel).predict(&input).unwrap()
	);
}

#[test]
fn unusable_corpus_fails_generation() {
	let model = FrequencyModel::from_text("1 22 333 ( )");
	assert!(model.is_empty());
	let result = Generator::new(&model).predict(&GenerationInput::default());
	assert!(matches!(result, Err(Error::EmptyModel)));
}
