use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{LevelFilter, info};

use rs_markov_core::io::resolve_corpus;
use rs_markov_core::model::{FrequencyModel, GenerationInput, Generator};

/// Generate sentences from a text corpus with an order-2 Markov chain.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version, about, long_about = None)]
struct Cli {
	/// Corpus file. Defaults to the first .txt file of the working directory
	corpus: Option<String>,

	/// Number of sentences to generate
	#[arg(short = 'n', long, default_value_t = 3)]
	sentences: usize,

	/// Seed for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Maximum number of words in a sentence
	#[arg(long)]
	max_words: Option<usize>,

	/// Learning threads (0 = one chunk set per CPU core, 1 = sequential)
	#[arg(short = 'j', long, default_value_t = 1)]
	workers: usize,

	/// Increase verbosity (-v, -vv, -vvv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,
}

fn init_logger(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	// RUST_LOG overrides the flag
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_logger(cli.verbose);

	let dir = std::env::current_dir().context("cannot read the working directory")?;
	let corpus = resolve_corpus(cli.corpus.as_deref(), &dir)?;

	let model = FrequencyModel::from_file(&corpus, cli.workers)
		.with_context(|| format!("failed to learn from {}", corpus.display()))?;
	info!(
		"{} distinct words, {} sentence starts",
		model.len(),
		model.start_words().total()
	);

	let mut input = GenerationInput::new(cli.sentences);
	input.seed = cli.seed;
	input.set_max_words(cli.max_words)?;

	let output = Generator::new(&model).predict(&input)?;
	print!("{output}");

	Ok(())
}
