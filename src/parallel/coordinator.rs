//! Worker orchestration for parallel multi-restart annealing.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::register::BestRegister;
use crate::error::{Error, Result};
use crate::sa::{AnnealConfig, AnnealingSearch};
use crate::table::DistanceTable;
use crate::tour::Tour;

/// A worker that did not run to completion, with the reason.
///
/// One worker failing never aborts the run: the other workers' results
/// still count and the failure is reported alongside them.
#[derive(Debug, Clone)]
pub struct WorkerFailure {
    /// Index of the failed worker.
    pub worker: usize,
    /// Human-readable failure description.
    pub message: String,
}

/// Outcome of [`run_parallel`]: the globally best tour plus any
/// recorded worker failures.
#[derive(Debug)]
pub struct ParallelOutcome {
    pub best: Tour,
    pub best_length: u64,
    pub failures: Vec<WorkerFailure>,
}

/// Races independent annealing searches and converges on one best tour.
///
/// Each worker owns a full [`AnnealingSearch`] — its own trajectory,
/// temperature, and random source — and performs a fixed number of
/// sequential restarts, offering every restart's result to the shared
/// [`BestRegister`]. When the run is seeded, worker `w` gets the base
/// seed plus `w`, so parallel runs are reproducible and workers draw
/// statistically independent streams.
pub struct ParallelCoordinator {
    table: Arc<DistanceTable>,
    config: AnnealConfig,
    register: Arc<BestRegister>,
    cancel: Arc<AtomicBool>,
    workers: Vec<(usize, JoinHandle<Result<()>>)>,
    failures: Vec<WorkerFailure>,
    launched: usize,
}

impl ParallelCoordinator {
    /// Creates a coordinator over `table`. Fails fast on tables with
    /// fewer than 3 towns and on invalid configurations, before any
    /// thread is spawned.
    pub fn new(table: Arc<DistanceTable>, config: AnnealConfig) -> Result<Self> {
        if table.size() < 3 {
            return Err(Error::TooFewTowns(table.size()));
        }
        config.validate()?;
        Ok(Self {
            table,
            config,
            register: Arc::new(BestRegister::new()),
            cancel: Arc::new(AtomicBool::new(false)),
            workers: Vec::new(),
            failures: Vec::new(),
            launched: 0,
        })
    }

    /// Launches `num_workers` worker threads, each performing
    /// `restarts_per_worker` sequential annealing runs.
    pub fn start(&mut self, num_workers: usize, restarts_per_worker: usize) -> Result<()> {
        if num_workers == 0 {
            return Err(Error::NoWorkers);
        }
        if restarts_per_worker == 0 {
            return Err(Error::NoRestarts);
        }

        for _ in 0..num_workers {
            let worker = self.launched;
            let table = Arc::clone(&self.table);
            let register = Arc::clone(&self.register);
            let cancel = Arc::clone(&self.cancel);

            let mut config = self.config.clone();
            if let Some(base) = config.seed {
                config.seed = Some(base.wrapping_add(worker as u64));
            }

            let handle = thread::Builder::new()
                .name(format!("anneal-{worker}"))
                .spawn(move || {
                    worker_loop(worker, table, config, restarts_per_worker, register, cancel)
                })?;

            self.workers.push((worker, handle));
            self.launched += 1;
        }
        Ok(())
    }

    /// Asks every worker to stop at its next restart or temperature
    /// level boundary.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Blocks until every launched worker has finished. Worker faults —
    /// both returned errors and panics — are recorded and do not abort
    /// the remaining workers or clobber the register.
    pub fn wait_all(&mut self) {
        for (worker, handle) in self.workers.drain(..) {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    warn!(worker, %error, "worker failed");
                    self.failures.push(WorkerFailure {
                        worker,
                        message: error.to_string(),
                    });
                }
                Err(payload) => {
                    let message = panic_message(payload);
                    warn!(worker, reason = %message, "worker panicked");
                    self.failures.push(WorkerFailure { worker, message });
                }
            }
        }
    }

    /// A copy of the globally best tour submitted so far.
    pub fn best(&self) -> Option<Tour> {
        self.register.best()
    }

    /// Length of the globally best tour submitted so far.
    pub fn best_length(&self) -> Option<u64> {
        self.register.best_length()
    }

    /// Failures recorded by [`wait_all`](Self::wait_all).
    pub fn failures(&self) -> &[WorkerFailure] {
        &self.failures
    }
}

fn worker_loop(
    worker: usize,
    table: Arc<DistanceTable>,
    config: AnnealConfig,
    restarts: usize,
    register: Arc<BestRegister>,
    cancel: Arc<AtomicBool>,
) -> Result<()> {
    let mut search = AnnealingSearch::new(table, config)?;
    for restart in 0..restarts {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        let outcome = search.run_with_cancel(Some(Arc::clone(&cancel)));
        let improved = register.submit(outcome.best);
        debug!(
            worker,
            restart,
            length = outcome.best_length,
            improved,
            "restart finished"
        );
        if outcome.cancelled {
            break;
        }
    }
    Ok(())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Runs `num_workers` concurrent searches of `restarts_per_worker`
/// restarts each and returns the globally best tour.
///
/// Fails fast on an empty worker or restart count; fails with
/// [`Error::AllWorkersFailed`] only when not a single worker managed to
/// submit a tour.
pub fn run_parallel(
    table: Arc<DistanceTable>,
    config: AnnealConfig,
    num_workers: usize,
    restarts_per_worker: usize,
) -> Result<ParallelOutcome> {
    let mut coordinator = ParallelCoordinator::new(table, config)?;
    coordinator.start(num_workers, restarts_per_worker)?;
    coordinator.wait_all();

    let best = coordinator
        .best()
        .ok_or(Error::AllWorkersFailed(num_workers))?;
    Ok(ParallelOutcome {
        best_length: best.length(),
        best,
        failures: coordinator.failures,
    })
}
