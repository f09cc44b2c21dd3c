//! Exhaustive enumeration of feasible visit chains.
//!
//! The search is a pure, stack-based depth-first traversal: candidates are
//! sorted earliest-deadline-first, then extended forward-only through the
//! sorted order so every feasible chain is produced exactly once, as a
//! strictly increasing index subsequence. Worst case is exponential in the
//! number of visits; this is the documented cost of listing *all* chains and
//! only makes sense for small batches (tens of visits). Callers wanting a
//! bound impose it externally.

use serde::{Deserialize, Serialize};

use crate::models::{Minutes, Visit};

/// An ordered, time-feasible sequence of visits for a fixed per-visit
/// duration. Recorded chains are frozen snapshots, independent of the
/// search buffer that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub visits: Vec<Visit>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Replay the scheduled-start recurrence: starting from minute 0, each
    /// visit begins at `max(clock, window.start)` and must finish inside its
    /// window. Any chain the enumerator emits satisfies this by
    /// construction; the check is exposed as a validator for callers and
    /// tests.
    pub fn is_feasible(&self, duration: i32) -> bool {
        let mut clock = Minutes::new(0);
        for visit in &self.visits {
            match visit.window.admits(clock, duration) {
                Some(begin) => clock = Minutes::new(begin.value() + duration),
                None => return false,
            }
        }
        true
    }
}

/// Enumerate every feasible chain over `visits` for one fixed `duration`.
///
/// The result contains one entry for every feasible prefix, including the
/// empty chain at the root, not only maximal chains. Input records are never
/// mutated; ties in the deadline sort keep original input order, so repeated
/// runs on the same input are bit-identical.
///
/// A visit whose own window cannot accommodate the duration simply never
/// extends any chain; it is not an error.
pub fn enumerate_chains(visits: &[Visit], duration: i32) -> Vec<Chain> {
    // Earliest deadline first; stable, so input order breaks ties.
    let mut order: Vec<&Visit> = visits.iter().collect();
    order.sort_by_key(|v| v.window.end);

    let mut results = Vec::new();
    let mut prefix: Vec<Visit> = Vec::new();
    extend(&order, duration, 0, Minutes::new(0), &mut prefix, &mut results);
    results
}

fn extend(
    order: &[&Visit],
    duration: i32,
    cursor: usize,
    clock: Minutes,
    prefix: &mut Vec<Visit>,
    results: &mut Vec<Chain>,
) {
    // Record the current prefix before exploring children.
    results.push(Chain {
        visits: prefix.clone(),
    });

    for i in cursor..order.len() {
        if let Some(begin) = order[i].window.admits(clock, duration) {
            prefix.push(order[i].clone());
            extend(
                order,
                duration,
                i + 1,
                Minutes::new(begin.value() + duration),
                prefix,
                results,
            );
            prefix.pop();
        }
    }
}
