//! Selection of the chains worth returning to a caller.

use std::cmp::Reverse;

use super::enumerate::Chain;

/// Reduce the full enumerated result set to the top `k` chains.
///
/// Drops the empty chain, orders the rest by descending length (stable, so
/// enumeration order breaks ties), and returns the best chain length
/// alongside the top `k`. Holds no state between queries.
pub fn rank_chains(chains: Vec<Chain>, k: usize) -> (usize, Vec<Chain>) {
    let mut kept: Vec<Chain> = chains.into_iter().filter(|c| !c.is_empty()).collect();
    kept.sort_by_key(|c| Reverse(c.len()));
    let best = kept.first().map_or(0, Chain::len);
    kept.truncate(k);
    (best, kept)
}
