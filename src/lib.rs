//! # Letterpeg
//!
//! A multithreaded heuristic solver for five-letter word puzzles with
//! colored-peg feedback.
//!
//! The solver narrows a candidate set with each round of feedback and picks
//! the next guess by letter popularity: how often each letter occurs across
//! the remaining candidates, weighted by how often it occurs at each
//! position.

pub mod benchmark;
pub mod feedback;
pub mod popularity;
pub mod solver;

pub use feedback::{Feedback, FeedbackVector};
pub use popularity::PopularityModel;
pub use solver::{SessionRecord, Solver};

use std::io;
use std::path::Path;

/// Word length for the puzzle
pub const WORD_LENGTH: usize = 5;

/// Maximum guesses allowed per solving session
pub const MAX_ROUNDS: usize = 6;

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Vec<String> {
    parse_dictionary(include_str!("../dictionary/words.txt"))
}

/// Load a dictionary from a file on disk
pub fn load_dictionary_file(path: &Path) -> io::Result<Vec<String>> {
    Ok(parse_dictionary(&std::fs::read_to_string(path)?))
}

/// Extract words from raw dictionary text.
///
/// Tokens are lowercased; anything that is not exactly [`WORD_LENGTH`] ASCII
/// letters after normalization is skipped rather than truncated or padded.
pub fn parse_dictionary(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| {
            word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
        })
        .collect()
}
