use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	/// The start-word table is empty, no sentence can begin.
	#[error("model has no sentence start words (empty or unusable corpus)")]
	EmptyModel,

	#[error("no .txt corpus found in {}", dir.display())]
	NoCorpus { dir: PathBuf },

	#[error("{0}")]
	InvalidInput(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
