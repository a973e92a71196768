//! Concurrent multi-restart search.
//!
//! Runs several independent annealing searches at once and keeps the
//! globally shortest tour in a mutex-guarded register. Workers never
//! share search state: each owns its temperature, trajectory, and
//! random source, and every tour submitted to the register is an owned
//! deep copy, so the register lock is the only synchronisation point.

mod coordinator;
mod register;

pub use coordinator::{run_parallel, ParallelCoordinator, ParallelOutcome, WorkerFailure};
pub use register::BestRegister;
