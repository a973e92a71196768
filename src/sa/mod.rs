//! Simulated annealing over the 2-opt neighbourhood.
//!
//! A single-solution trajectory search: start from the nearest-neighbour
//! tour, repeatedly propose random 2-opt moves, and accept worsening
//! moves with a probability that shrinks as the temperature falls. This
//! lets the search escape the local optima plain hill-climbing gets
//! stuck in.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{run_single, AnnealResult, AnnealingSearch};
