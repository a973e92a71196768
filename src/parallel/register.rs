//! Shared best-tour register.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::tour::Tour;

struct BestEntry {
    length: u64,
    tour: Tour,
}

/// The single shared slot holding the shortest tour seen so far.
///
/// Strictly-shorter-wins: a candidate replaces the occupant only when
/// its length is smaller. Candidate lengths are measured *before* the
/// lock is taken, so the critical section is just the compare and the
/// swap.
pub struct BestRegister {
    slot: Mutex<Option<BestEntry>>,
}

impl BestRegister {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<BestEntry>> {
        // a poisoned lock only means some worker panicked elsewhere; the
        // slot itself is always a fully-written entry or empty
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Offers `candidate` to the register. Returns whether it became
    /// the new best.
    pub fn submit(&self, candidate: Tour) -> bool {
        let length = candidate.length();
        let mut slot = self.lock();
        match slot.as_ref() {
            Some(best) if best.length <= length => false,
            _ => {
                *slot = Some(BestEntry {
                    length,
                    tour: candidate,
                });
                true
            }
        }
    }

    /// A copy of the current best tour, if any worker has submitted one.
    pub fn best(&self) -> Option<Tour> {
        self.lock().as_ref().map(|entry| entry.tour.clone())
    }

    /// Length of the current best tour.
    pub fn best_length(&self) -> Option<u64> {
        self.lock().as_ref().map(|entry| entry.length)
    }
}

impl Default for BestRegister {
    fn default() -> Self {
        Self::new()
    }
}
