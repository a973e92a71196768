//! Heuristic solver for the symmetric Traveling Salesman Problem.
//!
//! Simulated annealing over a 2-opt neighbourhood, optionally racing
//! several independent searches in parallel and keeping the globally
//! best tour:
//!
//! - **table**: immutable town/distance lookup (lower-triangular,
//!   symmetric) plus the distance-file parser.
//! - **tour**: cyclic permutation of towns with a memoised length and
//!   the 2-opt edge-exchange operator.
//! - **sa**: the annealing loop — nearest-neighbour seeding, Metropolis
//!   acceptance, geometric cooling.
//! - **parallel**: multi-restart coordination across worker threads
//!   with one mutex-guarded best-tour register.
//!
//! # Examples
//!
//! ```
//! use tsp_anneal::{run_parallel, AnnealConfig, DistanceTable};
//! use std::sync::Arc;
//!
//! let table = Arc::new(DistanceTable::new(
//!     vec!["NW".into(), "NE".into(), "SE".into(), "SW".into()],
//!     vec![vec![0], vec![10, 0], vec![14, 10, 0], vec![10, 14, 10, 0]],
//! )?);
//!
//! let config = AnnealConfig::default().with_seed(7);
//! let outcome = run_parallel(table, config, 4, 2)?;
//! assert_eq!(outcome.best_length, 40);
//! # Ok::<(), tsp_anneal::Error>(())
//! ```

pub mod error;
pub mod parallel;
pub mod sa;
pub mod table;
pub mod tour;

pub use error::{Error, Result};
pub use parallel::{run_parallel, ParallelCoordinator, ParallelOutcome};
pub use sa::{run_single, AnnealConfig, AnnealResult, AnnealingSearch};
pub use table::{parse_file, parse_str, DistanceTable};
pub use tour::Tour;
