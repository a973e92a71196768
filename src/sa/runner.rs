//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::AnnealConfig;
use crate::error::{Error, Result};
use crate::table::DistanceTable;
use crate::tour::Tour;

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The shortest tour observed over the whole run.
    pub best: Tour,

    /// Length of the best tour.
    pub best_length: u64,

    /// Total number of neighbour proposals.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted strictly-improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best length after seeding and after each temperature level.
    pub length_history: Vec<u64>,
}

/// One independent annealing search over a shared distance table.
///
/// The search owns its random source, which keeps advancing across
/// successive [`run`](Self::run) calls: calling `run` repeatedly on the
/// same instance performs independent restarts while staying fully
/// reproducible from the one configured seed.
///
/// Every run starts over from the deterministic nearest-neighbour tour.
/// Each temperature level then re-seeds its inner loop from the best
/// tour found so far rather than continuing from the previous level's
/// ending state, so a level never inherits a badly-worsened trajectory.
pub struct AnnealingSearch {
    table: Arc<DistanceTable>,
    config: AnnealConfig,
    rng: StdRng,
}

impl AnnealingSearch {
    /// Creates a search over `table`.
    ///
    /// Fails when the table has fewer than 3 towns — no 2-opt move
    /// exists below that, so neighbour generation could never produce a
    /// move — or when the configuration is invalid.
    pub fn new(table: Arc<DistanceTable>, config: AnnealConfig) -> Result<Self> {
        if table.size() < 3 {
            return Err(Error::TooFewTowns(table.size()));
        }
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { table, config, rng })
    }

    /// Runs the annealing loop once and returns the best tour found.
    pub fn run(&mut self) -> AnnealResult {
        self.run_with_cancel(None)
    }

    /// Runs the annealing loop with an optional cancellation token,
    /// checked between temperature levels. A cancelled run still
    /// returns the best tour observed so far.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> AnnealResult {
        let mut best = Tour::nearest_neighbor(Arc::clone(&self.table));
        let mut best_length = best.length();
        debug!(seed_length = best_length, "nearest-neighbour seed");

        let mut temperature = self.config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut length_history = vec![best_length];

        while temperature > self.config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // every level restarts its trajectory from the best so far
            let mut current = best.clone();
            let mut current_length = best_length;

            for _ in 0..self.config.steps_per_temperature {
                let candidate = self.neighbor(&current);
                let candidate_length = candidate.length();

                if metropolis_accepts(
                    &mut self.rng,
                    current_length,
                    candidate_length,
                    self.config.metropolis_scale * temperature,
                ) {
                    if candidate_length < current_length {
                        improving_moves += 1;
                    }
                    current = candidate;
                    current_length = candidate_length;
                    accepted_moves += 1;

                    if current_length < best_length {
                        best = current.clone();
                        best_length = current_length;
                    }
                }
                iterations += 1;
            }

            temperature *= self.config.cooling_factor;
            length_history.push(best_length);
        }

        debug!(best_length, iterations, "annealing run finished");

        AnnealResult {
            best,
            best_length,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cancelled,
            length_history,
        }
    }

    /// Draws uniform position pairs until they form a valid 2-opt move.
    ///
    /// Degenerate draws (same or adjacent positions) are simply redrawn;
    /// with at least 3 towns a valid pair always exists, so the loop
    /// terminates.
    fn neighbor(&mut self, tour: &Tour) -> Tour {
        let n = tour.size();
        loop {
            let a = self.rng.random_range(0..n);
            let b = self.rng.random_range(0..n);
            if let Some(next) = tour.two_opt(a, b) {
                return next;
            }
        }
    }
}

/// Metropolis criterion: improvements are always taken; a worsening (or
/// equal) candidate is taken when `exp(delta / temperature) >= r` with
/// `delta = current - candidate <= 0` and `r` uniform in [0, 1).
fn metropolis_accepts<R: Rng>(
    rng: &mut R,
    current_length: u64,
    candidate_length: u64,
    temperature: f64,
) -> bool {
    if candidate_length < current_length {
        return true;
    }
    let delta = current_length as f64 - candidate_length as f64;
    let acceptance = (delta / temperature).exp();
    acceptance >= rng.random_range(0.0..1.0)
}

/// Runs a single annealing search over `table` and returns its result.
pub fn run_single(table: Arc<DistanceTable>, config: AnnealConfig) -> Result<AnnealResult> {
    let mut search = AnnealingSearch::new(table, config)?;
    Ok(search.run())
}
