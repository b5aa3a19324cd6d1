//! Batch run over the answer corpus
//!
//! Solves every selected answer and reduces the attempt records into
//! [`RunStatistics`]. Attempts are independent, so the parallel path simply maps
//! answers through rayon and merges the partial statistics.

use crate::core::Word;
use crate::solver::{AttemptRecord, Outcome, SolveError, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Which answers to run and how
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Only the first `limit` answers
    pub limit: Option<usize>,
    /// A random sample of this many answers, kept in corpus order
    pub sample: Option<usize>,
    /// Seed for the sample; random when absent
    pub seed: Option<u64>,
    pub parallel: bool,
    pub show_progress: bool,
}

/// A failed attempt kept for the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    pub answer: String,
    pub guesses: Vec<String>,
    pub reason: SolveError,
}

/// Aggregate results of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Solved attempts per winning round
    pub distribution: HashMap<usize, usize>,
    /// Sum of winning rounds over solved attempts
    pub total_rounds: usize,
    pub failures: Vec<FailedAttempt>,
    /// Words that needed one of the last two rounds
    pub hardest_words: Vec<(String, usize)>,
    pub total_time: Duration,
}

impl RunStatistics {
    /// Fold one attempt into the statistics
    pub fn record(&mut self, attempt: &AttemptRecord, max_rounds: usize) {
        self.total_words += 1;
        match attempt.outcome {
            Outcome::Solved(round) => {
                self.solved += 1;
                self.total_rounds += round;
                *self.distribution.entry(round).or_insert(0) += 1;
                if round + 1 >= max_rounds {
                    let answer = attempt.answer.text().to_string();
                    self.hardest_words.push((answer, round));
                }
            }
            Outcome::Failed(reason) => {
                log::warn!(
                    "{}: {reason} after {} guesses",
                    attempt.answer,
                    attempt.steps.len()
                );
                self.failures.push(FailedAttempt {
                    answer: attempt.answer.text().to_string(),
                    guesses: attempt.guesses().map(|w| w.text().to_string()).collect(),
                    reason,
                });
            }
        }
    }

    /// Combine two partial results; `other` is treated as coming after `self`
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total_words += other.total_words;
        self.solved += other.solved;
        self.total_rounds += other.total_rounds;
        for (round, count) in other.distribution {
            *self.distribution.entry(round).or_insert(0) += count;
        }
        self.failures.extend(other.failures);
        self.hardest_words.extend(other.hardest_words);
        self.total_time = self.total_time.max(other.total_time);
        self
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total_words - self.solved
    }

    /// Solved share of all attempts, in percent
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }

    /// Mean winning round over solved attempts
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.solved as f64
        }
    }

    #[must_use]
    pub fn solved_in(&self, round: usize) -> usize {
        self.distribution.get(&round).copied().unwrap_or(0)
    }
}

/// Pick the answers a run covers
///
/// `sample` takes precedence over `limit`. Sampled words keep corpus order.
#[must_use]
pub fn select_answers<'a>(answer_words: &'a [Word], config: &RunConfig) -> Vec<&'a Word> {
    if let Some(amount) = config.sample {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("sampling {amount} answers with seed {seed}");

        let mut rng = StdRng::seed_from_u64(seed);
        let amount = amount.min(answer_words.len());
        let mut indices = rand::seq::index::sample(&mut rng, answer_words.len(), amount).into_vec();
        indices.sort_unstable();
        return indices.into_iter().map(|i| &answer_words[i]).collect();
    }

    answer_words
        .iter()
        .take(config.limit.unwrap_or(answer_words.len()))
        .collect()
}

/// Solve every selected answer and aggregate the results
pub fn run_all<S: Strategy + Sync>(solver: &Solver<S>, config: &RunConfig) -> RunStatistics {
    let answers = select_answers(solver.answer_words(), config);
    let max_rounds = solver.config().max_rounds;

    log::info!(
        "solving {} answers (opening {}, max rounds {max_rounds}, parallel {})",
        answers.len(),
        solver.config().opening,
        config.parallel
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let single = |answer: &Word| {
        let attempt = solver.solve_one(answer);
        let mut stats = RunStatistics::default();
        stats.record(&attempt, max_rounds);
        pb.inc(1);
        stats
    };

    let mut stats = if config.parallel {
        answers
            .par_iter()
            .map(|&answer| single(answer))
            .reduce(RunStatistics::default, RunStatistics::merge)
    } else {
        answers
            .iter()
            .enumerate()
            .fold(RunStatistics::default(), |acc, (idx, &answer)| {
                let acc = acc.merge(single(answer));
                if idx % 10 == 0 {
                    pb.set_message(format!("Avg: {:.3}", acc.average_rounds()));
                }
                acc
            })
    };

    stats.total_time = start.elapsed();
    pb.finish_with_message(format!("Avg: {:.3}", stats.average_rounds()));

    stats
        .hardest_words
        .sort_by_key(|(_, rounds)| std::cmp::Reverse(*rounds));
    stats
}
