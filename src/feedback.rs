//! Feedback evaluation for guesses.
//!
//! This module computes the per-letter result of comparing a guess against a
//! secret word, and converts results to and from their textual digit form.

use crate::WORD_LENGTH;

/// The result for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the secret (or every occurrence is already
    /// accounted for)
    Absent,
    /// Letter occurs in the secret at a different position
    Present,
    /// Letter matches the secret at this position
    Exact,
}

impl Feedback {
    /// Parse from a result digit
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Feedback::Absent),
            '1' => Some(Feedback::Present),
            '2' => Some(Feedback::Exact),
            _ => None,
        }
    }

    /// Render as a result digit
    pub fn to_char(self) -> char {
        match self {
            Feedback::Absent => '0',
            Feedback::Present => '1',
            Feedback::Exact => '2',
        }
    }
}

/// The complete result of one guess: one [`Feedback`] code per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackVector(pub [Feedback; WORD_LENGTH]);

impl FeedbackVector {
    /// The vector indicating a solved puzzle
    pub const ALL_EXACT: Self = Self([Feedback::Exact; WORD_LENGTH]);

    /// Compute the feedback for a guess against a secret.
    ///
    /// Exact matches are assigned first and consume their secret position.
    /// Each remaining guess letter then claims one leftover occurrence of
    /// that letter in the secret, left to right, so a letter is never marked
    /// present more times than it remains in the secret.
    pub fn calculate(guess: &str, secret: &str) -> Self {
        let guess = guess.as_bytes();
        let secret = secret.as_bytes();

        debug_assert_eq!(guess.len(), WORD_LENGTH);
        debug_assert_eq!(secret.len(), WORD_LENGTH);

        let mut codes = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                codes[i] = Feedback::Exact;
            } else {
                remaining[(secret[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if codes[i] != Feedback::Exact {
                let idx = (guess[i] - b'a') as usize;
                if remaining[idx] > 0 {
                    codes[i] = Feedback::Present;
                    remaining[idx] -= 1;
                }
            }
        }

        Self(codes)
    }

    /// Parse a vector from a string of result digits like "21000".
    ///
    /// The first [`WORD_LENGTH`] non-whitespace characters must each be '0',
    /// '1' or '2', so both "21000" and the rendered form "2 1 0 0 0" parse;
    /// trailing characters are ignored. Shorter or malformed input yields
    /// `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut codes = [Feedback::Absent; WORD_LENGTH];
        let mut digits = s.chars().filter(|c| !c.is_whitespace());
        for code in codes.iter_mut() {
            *code = Feedback::from_char(digits.next()?)?;
        }
        Some(Self(codes))
    }

    /// Check whether this vector represents a solved puzzle (all exact)
    pub fn is_win(self) -> bool {
        self == Self::ALL_EXACT
    }
}

impl std::fmt::Display for FeedbackVector {
    /// Space-separated result digits, e.g. "2 1 0 0 0"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", code.to_char())?;
        }
        Ok(())
    }
}
