//! Top-level module for the Markov generation system.
//!
//! This module provides an order-2 word generator, including:
//! - Weighted word tables and sampling (`WeightTable`)
//! - Per-word successor statistics (`TokenRecord`)
//! - The corpus model (`FrequencyModel`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// Sentence generation over a `FrequencyModel`.
///
/// Blends order-1 and order-2 evidence per step with a one-step fallback.
pub mod generator;

/// Model of a corpus: per-word records and start words.
///
/// Supports sequential and parallel construction and merging.
pub mod frequency_model;

/// Successor statistics of a single word.
pub mod token_record;

/// Weighted word table with cached total and weighted sampling.
pub mod weights;

/// Generation parameters: sentence count, length cap, seed.
pub mod generation_input;

pub use frequency_model::FrequencyModel;
pub use generation_input::GenerationInput;
pub use generator::{Generator, Step, StepMode};
pub use token_record::TokenRecord;
pub use weights::WeightTable;
