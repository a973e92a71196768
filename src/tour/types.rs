//! The tour type.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use crate::table::DistanceTable;

/// Sentinel for "length not yet measured". 0 is never a real length:
/// distances are positive in practice and a cycle has at least one edge.
const UNMEASURED: u64 = 0;

/// An ordered visit of every town exactly once, interpreted as a cycle.
///
/// The total cyclic length is measured lazily and memoised; any slot
/// write resets the memo. The memo lives in a [`Cell`] because tours are
/// never shared between threads — every hand-off across a thread
/// boundary is a deep copy (see [`Tour::clone`]).
pub struct Tour {
    table: Arc<DistanceTable>,
    order: Vec<usize>,
    cached_length: Cell<u64>,
}

impl Tour {
    /// Creates a not-yet-valid tour with every slot set to town 0.
    ///
    /// Callers populate it with [`set_town_at`](Self::set_town_at); only
    /// once every town appears exactly once is the tour meaningful.
    pub fn new(table: Arc<DistanceTable>) -> Self {
        let size = table.size();
        Self {
            table,
            order: vec![0; size],
            cached_length: Cell::new(UNMEASURED),
        }
    }

    /// Seeds a tour with the nearest-neighbour heuristic: start at town
    /// 0 and repeatedly append the closest unvisited town. Deterministic
    /// for a given table, O(N²).
    pub fn nearest_neighbor(table: Arc<DistanceTable>) -> Self {
        let n = table.size();
        let mut order = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        if n > 0 {
            order.push(0);
            visited[0] = true;
        }
        while order.len() < n {
            let last = order[order.len() - 1];
            if let Some(next) = (0..n)
                .filter(|&town| !visited[town])
                .min_by_key(|&town| table.distance(last, town))
            {
                visited[next] = true;
                order.push(next);
            }
        }
        Self {
            table,
            order,
            cached_length: Cell::new(UNMEASURED),
        }
    }

    /// Number of towns in the tour.
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// The table this tour is measured against.
    pub fn table(&self) -> &Arc<DistanceTable> {
        &self.table
    }

    /// Town at `position`, taken modulo the tour size. `town_at(N)` is
    /// the start again, so iterating positions `0..=N` walks the whole
    /// cycle including the closing edge.
    pub fn town_at(&self, position: usize) -> usize {
        self.order[position % self.order.len()]
    }

    /// Overwrites one slot and invalidates the measured length.
    ///
    /// Does not by itself keep the tour a permutation — that is the
    /// caller's job during controlled construction.
    pub fn set_town_at(&mut self, position: usize, town: usize) {
        let n = self.order.len();
        self.order[position % n] = town;
        self.cached_length.set(UNMEASURED);
    }

    /// Total cyclic distance through all towns and back to the start.
    ///
    /// Measured on first call and memoised until a slot changes.
    pub fn length(&self) -> u64 {
        let cached = self.cached_length.get();
        if cached != UNMEASURED {
            return cached;
        }
        let mut total = 0u64;
        for i in 0..self.order.len() {
            total += u64::from(self.table.distance(self.town_at(i), self.town_at(i + 1)));
        }
        self.cached_length.set(total);
        total
    }

    /// Applies a 2-opt edge exchange after the two given positions.
    ///
    /// The move removes edges `(i1, i1+1)` and `(i2, i2+1)` and
    /// reconnects as `(i1, i2)` and `(i1+1, i2+1)` by reversing the
    /// segment strictly after `i1` through `i2`. Position 0 never moves,
    /// so the displayed start town stays stable across moves.
    ///
    /// Returns `None` when fewer than 2 edges separate the positions —
    /// reversing a zero- or one-element segment is not a move. Callers
    /// treat that as a signal to redraw, not as an error.
    pub fn two_opt(&self, pos_a: usize, pos_b: usize) -> Option<Tour> {
        let n = self.order.len();
        let (a, b) = (pos_a % n, pos_b % n);
        let (i1, i2) = if a <= b { (a, b) } else { (b, a) };
        if (i2 - i1) % n < 2 {
            return None;
        }
        let mut next = self.clone();
        next.order[i1 + 1..=i2].reverse();
        Some(next)
    }
}

/// Deep-copies the visit order and shares the table. The measured
/// length is deliberately not carried over: tours are usually cloned in
/// order to be mutated, so the copy re-measures lazily.
impl Clone for Tour {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            order: self.order.clone(),
            cached_length: Cell::new(UNMEASURED),
        }
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tour")
            .field("order", &self.order)
            .field("length", &self.length())
            .finish()
    }
}

/// Human-readable rendering for diagnostics: one `[i]Town ==d==>` line
/// per hop, the return to the start, and the total. Not a stable wire
/// format.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(&start) = self.order.first() else {
            return write!(f, "  Total: 0");
        };
        let mut total = 0u64;
        for i in 0..self.order.len() {
            let dist = self.table.distance(self.town_at(i), self.town_at(i + 1));
            total += u64::from(dist);
            writeln!(f, "[{}]{} =={}==>", i, self.table.town(self.town_at(i)), dist)?;
        }
        writeln!(f, "[0]{}", self.table.town(start))?;
        write!(f, "  Total: {total}")
    }
}
