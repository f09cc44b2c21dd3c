//! Chain enumeration and ranking for inspection visits.
//!
//! This is the core of the system: given validated visit records and a fixed
//! per-visit duration, list every feasible back-to-back visiting plan and
//! surface the longest ones. The search itself never raises domain errors;
//! all validation happens at the boundary before it runs.

pub mod enumerate;
pub mod rank;

pub use enumerate::{enumerate_chains, Chain};
pub use rank::rank_chains;

use serde::{Deserialize, Serialize};

use crate::models::{ValidationError, Visit};

/// Number of chains returned when the caller does not say otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// Output of one schedule query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Number of visits in the longest feasible chain (0 if none).
    pub best_chain_count: usize,
    /// The top chains by descending length, at most `top_k` of them.
    pub top_chains: Vec<Chain>,
}

/// Boundary operation composing normalization, enumeration, and ranking.
///
/// Fails up front on an empty visit set or a non-positive duration; once the
/// search starts it cannot fail. Pure: no logging, no persistence, and two
/// calls on the same input return identical results.
pub fn compute_schedule(
    visits: &[Visit],
    duration: i32,
    top_k: usize,
) -> Result<ScheduleResult, ValidationError> {
    if visits.is_empty() {
        return Err(ValidationError::EmptyVisitSet);
    }
    if duration <= 0 {
        return Err(ValidationError::NonPositiveDuration(duration));
    }

    let chains = enumerate_chains(visits, duration);
    let (best_chain_count, top_chains) = rank_chains(chains, top_k);
    Ok(ScheduleResult {
        best_chain_count,
        top_chains,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Minutes, Window};

    fn visit(name: &str, start: i32, end: i32) -> Visit {
        Visit::new(
            name,
            Location::default(),
            Window::new(Minutes::new(start), Minutes::new(end)).unwrap(),
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_visit_set_rejected() {
        let err = compute_schedule(&[], 10, DEFAULT_TOP_K).unwrap_err();
        assert_eq!(err, ValidationError::EmptyVisitSet);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = compute_schedule(&[visit("a", 0, 30)], 0, DEFAULT_TOP_K).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveDuration(0));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = compute_schedule(&[visit("a", 0, 30)], -5, DEFAULT_TOP_K).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveDuration(-5));
    }

    #[test]
    fn test_single_unfittable_window_gives_empty_result() {
        let result = compute_schedule(&[visit("tiny", 0, 5)], 10, DEFAULT_TOP_K).unwrap();
        assert_eq!(result.best_chain_count, 0);
        assert!(result.top_chains.is_empty());
    }

    #[test]
    fn test_happy_path() {
        let visits = vec![visit("x", 0, 30), visit("y", 20, 50)];
        let result = compute_schedule(&visits, 10, DEFAULT_TOP_K).unwrap();
        assert_eq!(result.best_chain_count, 2);
        assert_eq!(result.top_chains[0].len(), 2);
        assert!(result.top_chains.len() <= DEFAULT_TOP_K);
    }
}
