//! Word-level Markov text generation library.
//!
//! This crate provides an order-2 Markov sentence generator including:
//! - Corpus tokenization with sentence-boundary detection
//! - A frequency model of direct and skip-one successors
//! - Weighted random generation blending both successor tables
//! - Internal utilities for I/O and corpus discovery

/// Error types shared by the whole crate.
pub mod error;

/// Raw text to cleaned tokens.
pub mod tokenizer;

/// Frequency model and generation logic.
///
/// Exposes the model built from a corpus and the generator that reads it.
pub mod model;

/// I/O utilities (file loading, corpus discovery).
pub mod io;

pub use error::{Error, Result};
