//! Tour representation and the 2-opt neighbourhood move.
//!
//! A tour is a cyclic permutation of town indices over a shared
//! [`crate::table::DistanceTable`]. Positions are addressed modulo the
//! town count, so the closing edge back to the start needs no special
//! case. The neighbourhood operator is the classic 2-opt edge exchange.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod types;

pub use types::Tour;
