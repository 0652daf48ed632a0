use letterpeg::solver::consistent_with;
use letterpeg::{load_dictionary, FeedbackVector, Solver, MAX_ROUNDS};

fn get_test_words() -> Vec<String> {
    vec![
        "apple".to_string(),
        "angle".to_string(),
        "amble".to_string(),
    ]
}

fn get_test_words_with_ample() -> Vec<String> {
    let mut words = get_test_words();
    words.push("ample".to_string());
    words
}

#[test]
fn test_solver_creation() {
    let words = get_test_words();
    let solver = Solver::new(words.clone());
    assert_eq!(solver.remaining_count(), words.len());
    assert_eq!(solver.candidates(), words.as_slice());
}

#[test]
fn test_popularity_counts() {
    let solver = Solver::new(get_test_words());
    let model = solver.popularity();

    assert_eq!(model.letter_count(b'a'), 3);
    assert_eq!(model.letter_count(b'p'), 2);
    assert_eq!(model.letter_count(b'z'), 0);
    assert_eq!(model.position_count(b'a', 0), 3);
    assert_eq!(model.position_count(b'l', 3), 3);
    assert_eq!(model.position_count(b'l', 0), 0);
}

#[test]
fn test_score_word_prefers_popular_letters() {
    let solver = Solver::new(get_test_words());

    // apple: 3*3 + 2*1 + 1*1 + 3*3 + 3*3 = 30, angle/amble: 29
    assert_eq!(solver.score_word("apple"), 30);
    assert_eq!(solver.score_word("angle"), 29);
    assert_eq!(solver.score_word("amble"), 29);
}

#[test]
fn test_opening_guess() {
    let solver = Solver::new(get_test_words());
    assert_eq!(solver.find_best_guess(), Some("apple"));

    let solver = Solver::new(get_test_words_with_ample());
    assert_eq!(solver.find_best_guess(), Some("ample"));
}

#[test]
fn test_tied_scores_keep_first_candidate() {
    let solver = Solver::new(vec!["angle".to_string(), "amble".to_string()]);
    assert_eq!(solver.score_word("angle"), solver.score_word("amble"));
    assert_eq!(solver.find_best_guess(), Some("angle"));
}

#[test]
fn test_empty_pool_has_no_guess() {
    let solver = Solver::new(Vec::new());
    assert_eq!(solver.find_best_guess(), None);
}

#[test]
fn test_apply_feedback_keeps_consistent_words() {
    let mut solver = Solver::new(get_test_words());

    // guessing "angle" when the secret is "apple"
    let feedback = FeedbackVector::calculate("angle", "apple");
    solver.apply_feedback("angle", feedback);

    // the guess itself is always dropped; "apple" must survive
    let remaining = solver.candidates();
    assert!(!remaining.contains(&"angle".to_string()));
    assert!(remaining.contains(&"apple".to_string()));
    assert_eq!(remaining, ["apple".to_string(), "amble".to_string()]);
}

#[test]
fn test_apply_feedback_is_idempotent() {
    let mut solver = Solver::new(get_test_words());
    let feedback = FeedbackVector::calculate("angle", "apple");

    solver.apply_feedback("angle", feedback);
    let after_first: Vec<String> = solver.candidates().to_vec();

    solver.apply_feedback("angle", feedback);
    assert_eq!(solver.candidates(), after_first.as_slice());
}

#[test]
fn test_candidate_set_never_grows() {
    let mut solver = Solver::new(get_test_words_with_ample());
    let mut previous = solver.remaining_count();

    for guess in ["ample", "angle"] {
        let feedback = FeedbackVector::calculate(guess, "apple");
        solver.apply_feedback(guess, feedback);
        assert!(solver.remaining_count() <= previous);
        previous = solver.remaining_count();
    }
}

#[test]
fn test_last_candidate_is_never_filtered() {
    let mut solver = Solver::new(vec!["apple".to_string()]);

    // even feedback naming the word itself must not empty the pool
    solver.apply_feedback("apple", FeedbackVector::ALL_EXACT);
    assert_eq!(solver.candidates(), ["apple".to_string()]);
}

#[test]
fn test_contradictory_feedback_empties_pool() {
    let mut solver = Solver::new(get_test_words());
    solver.apply_feedback("zzzzz", FeedbackVector::ALL_EXACT);

    assert_eq!(solver.remaining_count(), 0);
    assert_eq!(solver.find_best_guess(), None);
}

#[test]
fn test_consistent_with_exact_positions() {
    let feedback = FeedbackVector::parse("22022").unwrap();
    assert!(consistent_with("amble", "ample", feedback));
    assert!(!consistent_with("angle", "ample", feedback));
}

#[test]
fn test_consistent_with_misplaced_letters() {
    // "raise" against the secret "arise": r and a swap places
    let feedback = FeedbackVector::calculate("raise", "arise");
    assert_eq!(feedback, FeedbackVector::parse("11222").unwrap());
    assert!(consistent_with("arise", "raise", feedback));

    // a word with either letter sitting still is impossible
    assert!(!consistent_with("raise", "raise", feedback));
}

#[test]
fn test_consistent_with_counts_each_occurrence_once() {
    // two misplaced b's demand two separate b positions in the candidate
    let feedback = FeedbackVector::parse("01100").unwrap();
    assert!(consistent_with("burbs", "abbey", feedback));
    assert!(!consistent_with("bonus", "abbey", feedback));
}

#[test]
fn test_consistent_with_absent_letter() {
    let feedback = FeedbackVector::parse("00000").unwrap();
    assert!(consistent_with("doubt", "crane", feedback));
    assert!(!consistent_with("erupt", "crane", feedback));
}

#[test]
fn test_solve_when_opening_is_secret() {
    let mut solver = Solver::new(get_test_words_with_ample());
    let record = solver.solve_for_target("ample", "ample");

    assert!(record.solved);
    assert_eq!(record.rounds(), 1);
    assert_eq!(record.guesses, ["ample".to_string()]);
}

#[test]
fn test_solve_three_word_sessions() {
    // hand-checked traces over the three-word pool with opening "apple"
    let mut solver = Solver::new(get_test_words());
    let record = solver.solve_for_target("apple", "angle");
    assert!(record.solved);
    assert_eq!(record.guesses, ["apple".to_string(), "angle".to_string()]);

    let mut solver = Solver::new(get_test_words());
    let record = solver.solve_for_target("apple", "amble");
    assert!(record.solved);
    assert_eq!(
        record.guesses,
        [
            "apple".to_string(),
            "angle".to_string(),
            "amble".to_string()
        ]
    );
}

#[test]
fn test_unreachable_secret_reports_unsolved() {
    let mut solver = Solver::new(get_test_words());
    let record = solver.solve_for_target("apple", "zebra");

    assert!(!record.solved);
    assert!(record.rounds() <= MAX_ROUNDS);
    assert!(!record.guesses.is_empty());
}

#[test]
fn test_solve_with_full_dictionary() {
    let words = load_dictionary();
    assert!(!words.is_empty());

    let mut solver = Solver::new(words);
    let opening = solver.find_best_guess().unwrap().to_string();
    let record = solver.solve_for_target(&opening, "crane");

    assert!(record.rounds() <= MAX_ROUNDS);
    assert_eq!(record.guesses[0], opening);
    if record.solved {
        assert_eq!(record.guesses.last().unwrap(), "crane");
    }
}
