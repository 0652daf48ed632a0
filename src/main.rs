//! Letterpeg CLI
//!
//! Benchmark the solver over the whole dictionary, solve for a known or
//! randomly drawn secret, or drive the solver by hand against an external
//! game.

use clap::{Parser, Subcommand};
use letterpeg::{benchmark, FeedbackVector, Solver, MAX_ROUNDS, WORD_LENGTH};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::ThreadPoolBuilder;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

/// Round cap for the interactive loop, where feedback is typed in by hand
const INTERACTIVE_ROUNDS: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of worker threads.
    ///
    /// A value of 0 uses all available cores.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Load the dictionary from a file instead of the embedded word list
    #[arg(long)]
    dict: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve every dictionary word and report the average guess count
    Bench {
        /// Write one line per secret listing every guess made
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Solve for a known target word, printing the guess trace
    Solve { word: String },
    /// Solve for a randomly drawn secret
    Play {
        /// Seed for the secret draw, for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Read feedback digits from stdin, for playing against a real game
    Interactive,
}

fn main() {
    let args = Args::parse();

    let words = match &args.dict {
        Some(path) => match letterpeg::load_dictionary_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("failed to read dictionary {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => letterpeg::load_dictionary(),
    };
    if words.is_empty() {
        eprintln!("dictionary is empty");
        process::exit(1);
    }

    ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .unwrap();
    let workers = if args.threads == 0 {
        rayon::current_num_threads()
    } else {
        args.threads
    };

    match args.command.unwrap_or(Command::Bench { out: None }) {
        Command::Bench { out } => run_bench(&words, workers, out),
        Command::Solve { word } => {
            let target = word.to_lowercase();
            if target.len() != WORD_LENGTH || !target.bytes().all(|b| b.is_ascii_lowercase()) {
                eprintln!("word must be {} letters", WORD_LENGTH);
                process::exit(1);
            }
            run_solve(words, &target);
        }
        Command::Play { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let secret = words
                .choose(&mut rng)
                .cloned()
                .expect("dictionary is not empty");
            println!("Drew a secret word.");
            run_solve(words, &secret);
        }
        Command::Interactive => run_interactive(words),
    }
}

fn run_bench(words: &[String], workers: usize, out: Option<PathBuf>) {
    println!("Running benchmark on {} words...", words.len());

    match benchmark::run(words, workers, out.as_deref()) {
        Ok(report) => {
            println!("Average guesses: {:.3}", report.average_rounds);
            println!("Solved: {}/{}", report.solved, report.sessions);
            println!("Time elapsed: {:.2?}", report.elapsed);
        }
        Err(e) => {
            eprintln!("benchmark failed: {}", e);
            process::exit(1);
        }
    }
}

fn run_solve(words: Vec<String>, secret: &str) {
    let mut solver = Solver::new(words);
    let opening = match solver.find_best_guess() {
        Some(word) => word.to_string(),
        None => {
            eprintln!("no scorable opening guess");
            process::exit(1);
        }
    };

    let record = solver.solve_for_target(&opening, secret);
    for (i, guess) in record.guesses.iter().enumerate() {
        println!(
            "Guess {}: {} -> {}",
            i + 1,
            guess,
            FeedbackVector::calculate(guess, secret)
        );
    }
    if record.solved {
        println!("Solved in {} guesses.", record.rounds());
    } else {
        println!("Failed to solve within {} guesses; secret was {}.", MAX_ROUNDS, secret);
    }
}

fn run_interactive(words: Vec<String>) {
    let mut solver = Solver::new(words);
    let stdin = io::stdin();

    println!("Enter results as five digits: 0 absent, 1 misplaced, 2 exact.");

    for round in 1..=INTERACTIVE_ROUNDS {
        if solver.remaining_count() == 0 {
            println!("No candidates remain.");
            return;
        }
        let guess = match solver.find_best_guess() {
            Some(word) => word.to_string(),
            None => {
                println!("No scorable guess remains.");
                return;
            }
        };
        println!("guess: {}", guess);

        let feedback = loop {
            print!("Enter result: ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap() == 0 {
                return;
            }
            match FeedbackVector::parse(line.trim()) {
                Some(feedback) => break feedback,
                None => println!("Expected five digits 0-2, e.g. 21000."),
            }
        };

        if feedback.is_win() {
            println!("Solved in {} guesses.", round);
            return;
        }
        solver.apply_feedback(&guess, feedback);
        println!("word count: {}", solver.remaining_count());
    }
}
