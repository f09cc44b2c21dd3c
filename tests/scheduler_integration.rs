//! End-to-end tests of the scheduling core against its documented
//! behavior: the scheduled-start recurrence, exhaustiveness of the
//! enumeration, determinism, and the boundary validation rules.

use inspection_scheduler::models::{Location, Minutes, ValidationError, Visit, Window};
use inspection_scheduler::scheduler::{
    compute_schedule, enumerate_chains, Chain, DEFAULT_TOP_K,
};

fn visit(name: &str, start: i32, end: i32) -> Visit {
    Visit::new(
        name,
        Location::default(),
        Window::new(Minutes::new(start), Minutes::new(end)).unwrap(),
        0,
    )
    .unwrap()
}

fn chain_names(chain: &Chain) -> Vec<&str> {
    chain.visits.iter().map(|v| v.name.as_str()).collect()
}

/// Count feasible increasing-index subsequences of the deadline-sorted
/// input by brute force over all subsets.
fn brute_force_count(visits: &[Visit], duration: i32) -> usize {
    let mut order: Vec<&Visit> = visits.iter().collect();
    order.sort_by_key(|v| v.window.end);

    let n = order.len();
    assert!(n <= 8, "brute force only meant for small inputs");

    let mut count = 0;
    for mask in 0u32..(1 << n) {
        let subset: Vec<Visit> = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| order[i].clone())
            .collect();
        let candidate = Chain { visits: subset };
        if candidate.is_feasible(duration) {
            count += 1;
        }
    }
    count
}

#[test]
fn scenario_a_overlapping_windows() {
    // X(0-30), Y(20-50), duration 10: X at 0-10, Y at max(10,20)=20, ends 30 <= 50.
    let visits = vec![visit("x", 0, 30), visit("y", 20, 50)];
    let result = compute_schedule(&visits, 10, DEFAULT_TOP_K).unwrap();

    assert_eq!(result.best_chain_count, 2);
    assert_eq!(chain_names(&result.top_chains[0]), vec!["x", "y"]);

    let all: Vec<Vec<&str>> = result.top_chains.iter().map(chain_names).collect();
    assert!(all.contains(&vec!["y"]));
}

#[test]
fn scenario_b_identical_windows_chain_one_at_a_time() {
    let visits = vec![visit("a", 0, 10), visit("b", 0, 10)];

    // Before filtering: empty chain plus both singles.
    let chains = enumerate_chains(&visits, 10);
    assert_eq!(chains.len(), 3);
    let singles: Vec<Vec<&str>> = chains.iter().filter(|c| c.len() == 1).map(chain_names).collect();
    assert_eq!(singles, vec![vec!["a"], vec!["b"]]);

    let result = compute_schedule(&visits, 10, DEFAULT_TOP_K).unwrap();
    assert_eq!(result.best_chain_count, 1);
    assert_eq!(result.top_chains.len(), 2);
}

#[test]
fn scenario_c_nested_windows_need_deadline_order() {
    // Only the earliest-deadline-first ordering admits all three.
    let visits = vec![visit("late", 10, 40), visit("early", 0, 10), visit("mid", 5, 25)];
    let result = compute_schedule(&visits, 10, DEFAULT_TOP_K).unwrap();

    assert_eq!(result.best_chain_count, 3);
    assert_eq!(
        chain_names(&result.top_chains[0]),
        vec!["early", "mid", "late"]
    );
}

#[test]
fn enumeration_matches_brute_force_on_small_inputs() {
    let fixtures: Vec<(Vec<Visit>, i32)> = vec![
        (vec![visit("a", 0, 30), visit("b", 20, 50)], 10),
        (
            vec![
                visit("a", 540, 600),
                visit("b", 540, 700),
                visit("c", 600, 660),
                visit("d", 630, 800),
                visit("e", 540, 560),
            ],
            20,
        ),
        (
            vec![
                visit("a", 0, 15),
                visit("b", 0, 15),
                visit("c", 0, 15),
                visit("d", 10, 45),
                visit("e", 30, 90),
                visit("f", 0, 200),
                visit("g", 100, 140),
                visit("h", 0, 9),
            ],
            15,
        ),
    ];

    for (visits, duration) in fixtures {
        let enumerated = enumerate_chains(&visits, duration);
        assert_eq!(
            enumerated.len(),
            brute_force_count(&visits, duration),
            "enumeration must list every feasible subsequence exactly once"
        );
    }
}

#[test]
fn every_reported_chain_replays_cleanly() {
    let visits = vec![
        visit("a", 540, 620),
        visit("b", 560, 700),
        visit("c", 540, 1080),
        visit("d", 900, 960),
    ];
    let duration = 30;
    let result = compute_schedule(&visits, duration, 10).unwrap();
    for chain in &result.top_chains {
        assert!(chain.is_feasible(duration));
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let visits = vec![
        visit("a", 0, 60),
        visit("b", 0, 60),
        visit("c", 30, 120),
        visit("d", 30, 120),
    ];
    let first = compute_schedule(&visits, 20, 5).unwrap();
    let second = compute_schedule(&visits, 20, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_visit_set_is_a_validation_error() {
    assert_eq!(
        compute_schedule(&[], 10, DEFAULT_TOP_K).unwrap_err(),
        ValidationError::EmptyVisitSet
    );
}

#[test]
fn unfittable_single_window_reports_zero() {
    let result = compute_schedule(&[visit("tiny", 0, 5)], 10, DEFAULT_TOP_K).unwrap();
    assert_eq!(result.best_chain_count, 0);
    assert!(result.top_chains.is_empty());
}

#[test]
fn extreme_duration_is_infeasible_without_panicking() {
    let result = compute_schedule(&[visit("marathon", 1, 1440)], i32::MAX, DEFAULT_TOP_K).unwrap();
    assert_eq!(result.best_chain_count, 0);
    assert!(result.top_chains.is_empty());
}

#[test]
fn top_k_limits_the_returned_chains() {
    // Wide windows: plenty of feasible chains.
    let visits = vec![
        visit("a", 0, 1000),
        visit("b", 0, 1000),
        visit("c", 0, 1000),
        visit("d", 0, 1000),
    ];
    let result = compute_schedule(&visits, 10, 2).unwrap();
    assert_eq!(result.top_chains.len(), 2);
    assert_eq!(result.best_chain_count, 4);
    assert_eq!(result.top_chains[0].len(), 4);
}

#[test]
fn priority_does_not_influence_ranking() {
    let prioritized = |name: &str, start: i32, end: i32, priority: i32| {
        Visit::new(
            name,
            Location::default(),
            Window::new(Minutes::new(start), Minutes::new(end)).unwrap(),
            priority,
        )
        .unwrap()
    };
    let low = prioritized("low", 0, 30, 9);
    let high = prioritized("high", 200, 215, 0);

    // "low" chains with "mid"; the high-priority visit stands alone.
    let mid = visit("mid", 20, 50);
    let result = compute_schedule(&[high, low, mid], 10, DEFAULT_TOP_K).unwrap();
    assert_eq!(result.best_chain_count, 2);
    assert_eq!(chain_names(&result.top_chains[0]), vec!["low", "mid"]);
}
