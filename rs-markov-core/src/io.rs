use std::path::{Path, PathBuf};
use std::{fs, io};

use log::warn;

use crate::error::{Error, Result};

/// Reads a whole text file into memory.
///
/// Invalid UTF-8 sequences are replaced by U+FFFD instead of failing, so a
/// Latin-1 corpus still loads; the affected words keep the replacement char.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let path = filename.as_ref();
	let bytes = fs::read(path)?;
	Ok(match String::from_utf8(bytes) {
		Ok(text) => text,
		Err(e) => {
			warn!("{} is not valid UTF-8, invalid bytes were replaced", path.display());
			String::from_utf8_lossy(e.as_bytes()).into_owned()
		}
	})
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted by name.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Picks the corpus file to learn from.
///
/// - An argument containing `/` is used as given.
/// - A bare file name is resolved inside `dir`.
/// - Without an argument, the first `.txt` file of `dir` is taken.
///
/// # Errors
/// Returns `Error::NoCorpus` if no argument is given and `dir` holds no
/// `.txt` file.
pub fn resolve_corpus<P: AsRef<Path>>(arg: Option<&str>, dir: P) -> Result<PathBuf> {
	let dir = dir.as_ref();
	match arg {
		Some(a) if a.contains('/') => Ok(PathBuf::from(a)),
		Some(a) => Ok(dir.join(a)),
		None => {
			let first = list_files(dir, "txt")?
				.into_iter()
				.next()
				.ok_or_else(|| Error::NoCorpus { dir: dir.to_path_buf() })?;
			warn!("No corpus given, taking first text file found: {first}");
			Ok(dir.join(first))
		}
	}
}
