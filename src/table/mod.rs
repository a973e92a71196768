//! Distance table: pairwise town distances and town labels.
//!
//! A [`DistanceTable`] is built once — from a distance file via
//! [`parse_file`]/[`parse_str`] or directly from a lower-triangular
//! matrix — and is immutable afterwards, so concurrent searches share
//! it behind an `Arc` without any locking.

mod parser;
mod types;

pub use parser::{parse_file, parse_str};
pub use types::DistanceTable;
