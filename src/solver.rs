//! Heuristic solver using letter popularity scoring.
//!
//! The solver holds the set of words still consistent with every result seen
//! so far. Each round it prunes that set against the latest feedback, ranks
//! the survivors by how popular their letters are overall and at each
//! position, and proposes the top-ranked word as the next guess.

use crate::feedback::{Feedback, FeedbackVector};
use crate::popularity::PopularityModel;
use crate::{MAX_ROUNDS, WORD_LENGTH};

/// One complete solve attempt for a single secret.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Every guess made, in order
    pub guesses: Vec<String>,
    /// Whether the final guess matched the secret
    pub solved: bool,
}

impl SessionRecord {
    /// Number of rounds the session used
    pub fn rounds(&self) -> usize {
        self.guesses.len()
    }
}

/// The main solver: the remaining candidate words plus the popularity model
/// computed from them.
#[derive(Debug, Clone)]
pub struct Solver {
    candidates: Vec<String>,
    popularity: PopularityModel,
}

impl Solver {
    pub fn new(words: Vec<String>) -> Self {
        let popularity = PopularityModel::compute(&words);
        Self {
            candidates: words,
            popularity,
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn popularity(&self) -> &PopularityModel {
        &self.popularity
    }

    /// Prune the candidate set against one round of feedback.
    ///
    /// Keeps only words that could still be the secret given (guess,
    /// feedback), and always drops the guess itself so it is never proposed
    /// twice. With a single candidate left, filtering is skipped entirely so
    /// the final answer survives. The popularity model is rebuilt afterwards
    /// so scoring never sees stale counts.
    pub fn apply_feedback(&mut self, guess: &str, feedback: FeedbackVector) {
        if self.candidates.len() > 1 {
            self.candidates
                .retain(|word| word != guess && consistent_with(word, guess, feedback));
        }
        self.popularity = PopularityModel::compute(&self.candidates);
    }

    /// Score one word against the current popularity model.
    ///
    /// Each position contributes the letter's overall count times its count
    /// at that position. A letter already used earlier in the same word
    /// contributes with weight 1 instead, since repeats reveal less. Overall
    /// counts exceeding the candidate count are damped by the candidate
    /// count so saturated letters stop dominating small pools.
    pub fn score_word(&self, word: &str) -> u64 {
        let pool = self.candidates.len() as u64;
        let mut seen = 0u32;
        let mut score = 0u64;

        for (i, b) in word.bytes().enumerate() {
            let bit = 1u32 << (b - b'a');
            let weight = if seen & bit != 0 {
                1
            } else {
                let count = u64::from(self.popularity.letter_count(b));
                if count > pool {
                    count - pool
                } else {
                    count
                }
            };
            seen |= bit;
            score += weight * u64::from(self.popularity.position_count(b, i));
        }

        score
    }

    /// Pick the highest-scoring candidate as the next guess.
    ///
    /// Ties keep the first candidate found. Returns `None` when nothing
    /// scores above zero; an empty pool is terminal for the session, not
    /// retried.
    pub fn find_best_guess(&self) -> Option<&str> {
        let mut best = None;
        let mut best_score = 0u64;

        for word in &self.candidates {
            let score = self.score_word(word);
            if score > best_score {
                best_score = score;
                best = Some(word.as_str());
            }
        }

        best
    }

    /// Drive a full solving session, given a function that provides feedback.
    /// Returns the sequence of guesses made and whether the secret was found.
    pub fn solve_with_feedback<F>(&mut self, opening: &str, mut feedback_for: F) -> SessionRecord
    where
        F: FnMut(&str) -> FeedbackVector,
    {
        let mut guess = opening.to_string();
        let mut guesses = Vec::with_capacity(MAX_ROUNDS);

        for round in 1..=MAX_ROUNDS {
            guesses.push(guess.clone());
            let feedback = feedback_for(&guess);

            if feedback.is_win() {
                return SessionRecord {
                    guesses,
                    solved: true,
                };
            }
            if round == MAX_ROUNDS {
                break;
            }

            self.apply_feedback(&guess, feedback);
            match self.find_best_guess() {
                Some(next) => guess = next.to_string(),
                // pool exhausted: report unsolved with the guesses attempted
                None => break,
            }
        }

        SessionRecord {
            guesses,
            solved: false,
        }
    }

    /// Solve for a known secret (for testing and benchmarking)
    pub fn solve_for_target(&mut self, opening: &str, secret: &str) -> SessionRecord {
        self.solve_with_feedback(opening, |guess| FeedbackVector::calculate(guess, secret))
    }
}

/// Check whether `word` could still be the secret given one round of
/// feedback for `guess`.
///
/// This replays the evaluator's bookkeeping against the unknown secret:
/// positions of `word` claimed for a present-misplaced letter are tracked in
/// a scratch table local to this one comparison, so no occurrence is counted
/// twice.
pub fn consistent_with(word: &str, guess: &str, feedback: FeedbackVector) -> bool {
    let word = word.as_bytes();
    let guess = guess.as_bytes();

    debug_assert_eq!(word.len(), WORD_LENGTH);
    debug_assert_eq!(guess.len(), WORD_LENGTH);

    let mut claimed = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        let g = guess[i];
        match feedback.0[i] {
            Feedback::Exact => {
                if word[i] != g {
                    return false;
                }
            }
            Feedback::Absent => {
                // the letter must not occur at any position not already
                // accounted for by an exact or claimed present match
                for j in 0..WORD_LENGTH {
                    if feedback.0[j] != Feedback::Exact && !claimed[j] && word[j] == g {
                        return false;
                    }
                }
            }
            Feedback::Present => {
                if word[i] == g {
                    return false;
                }
                let mut found = false;
                for j in 0..WORD_LENGTH {
                    if !claimed[j]
                        && guess[j] != g
                        && feedback.0[j] != Feedback::Exact
                        && word[j] == g
                    {
                        claimed[j] = true;
                        found = true;
                        break;
                    }
                }
                if !found {
                    return false;
                }
            }
        }
    }

    true
}
