//! Benchmark harness: solve every dictionary word as the secret, in
//! parallel, and report the average number of guesses.

use crate::solver::{SessionRecord, Solver};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Aggregate results of one full benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Sessions run (one per dictionary word)
    pub sessions: usize,
    /// Sessions that found their secret within the round cap
    pub solved: usize,
    /// Mean guesses per session, unsolved sessions included
    pub average_rounds: f64,
    /// Wall-clock duration of the whole run
    pub elapsed: Duration,
}

/// Run the solver against every dictionary word as a hidden secret.
///
/// The opening guess is scored once from the full dictionary and shared by
/// every session. Secrets are split into disjoint contiguous chunks across
/// `workers` parallel tasks; each session gets its own clone of the base
/// solver, so no solving state is ever shared. When `log_path` is given, one
/// line per secret (the secret followed by every guess made) is written
/// after all workers have finished, in dictionary order.
pub fn run(words: &[String], workers: usize, log_path: Option<&Path>) -> io::Result<BenchmarkReport> {
    if words.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "dictionary is empty",
        ));
    }

    let start = Instant::now();

    let base = Solver::new(words.to_vec());
    let opening = base
        .find_best_guess()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no scorable opening guess"))?
        .to_string();

    let chunk_size = words.len().div_ceil(workers.max(1));
    let sessions: Vec<Vec<(String, SessionRecord)>> = words
        .par_chunks(chunk_size)
        .map(|secrets| {
            secrets
                .iter()
                .map(|secret| {
                    let mut solver = base.clone();
                    let record = solver.solve_for_target(&opening, secret);
                    (secret.clone(), record)
                })
                .collect()
        })
        .collect();

    // single writer after the join, in chunk order
    if let Some(path) = log_path {
        let mut out = BufWriter::new(File::create(path)?);
        for (secret, record) in sessions.iter().flatten() {
            write!(out, "{}", secret)?;
            for guess in &record.guesses {
                write!(out, " {}", guess)?;
            }
            writeln!(out)?;
        }
        out.flush()?;
    }

    let mut total_rounds = 0usize;
    let mut solved = 0usize;
    for (_, record) in sessions.iter().flatten() {
        total_rounds += record.rounds();
        if record.solved {
            solved += 1;
        }
    }

    Ok(BenchmarkReport {
        sessions: words.len(),
        solved,
        average_rounds: total_rounds as f64 / words.len() as f64,
        elapsed: start.elapsed(),
    })
}
