//! Comprehensive unit tests for the saturn-cdcl crate.

use std::collections::HashMap;

use saturn_cdcl::{CdclConfig, CdclSolver, SatResult};

fn solver_with(clauses: &[&[i64]]) -> CdclSolver {
    let mut solver = CdclSolver::new();
    for clause in clauses {
        solver.add_clause(clause).expect("clause should be accepted");
    }
    solver
}

fn solve(clauses: &[&[i64]]) -> SatResult {
    solver_with(clauses).solve()
}

/// Every clause must have at least one literal true under `model`.
fn assert_satisfies(model: &HashMap<u64, bool>, clauses: &[&[i64]]) {
    for clause in clauses {
        let satisfied = clause.iter().any(|&code| {
            code != 0 && model.get(&code.unsigned_abs()) == Some(&(code > 0))
        });
        assert!(satisfied, "clause {clause:?} not satisfied by {model:?}");
    }
}

// =============================================================================
// Boundary Cases
// =============================================================================

#[test]
fn test_empty_formula_is_sat() {
    match solve(&[]) {
        SatResult::Sat(model) => assert!(model.is_empty()),
        other => panic!("expected SAT, got {other:?}"),
    }
}

#[test]
fn test_single_unit_clause() {
    match solve(&[&[4]]) {
        SatResult::Sat(model) => assert_eq!(model.get(&4), Some(&true)),
        other => panic!("expected SAT, got {other:?}"),
    }
}

#[test]
fn test_negative_unit_clause() {
    match solve(&[&[-4]]) {
        SatResult::Sat(model) => assert_eq!(model.get(&4), Some(&false)),
        other => panic!("expected SAT, got {other:?}"),
    }
}

#[test]
fn test_contradictory_units_are_unsat() {
    assert_eq!(solve(&[&[1], &[-1]]), SatResult::Unsat);
}

#[test]
fn test_pure_decision_chain() {
    // Tautologies constrain nothing, so the verdict comes from decisions
    // alone; the default polarity branches positive.
    let clauses: &[&[i64]] = &[&[1, -1], &[2, -2], &[3, -3]];
    match solve(clauses) {
        SatResult::Sat(model) => {
            assert_eq!(model.len(), 3);
            assert!(model.values().all(|&v| v));
        }
        other => panic!("expected SAT, got {other:?}"),
    }
}

#[test]
fn test_all_sign_combinations_over_three_vars() {
    let clauses: &[&[i64]] = &[
        &[1, 2, 3],
        &[1, 2, -3],
        &[1, -2, 3],
        &[1, -2, -3],
        &[-1, 2, 3],
        &[-1, 2, -3],
        &[-1, -2, 3],
        &[-1, -2, -3],
    ];
    assert_eq!(solve(clauses), SatResult::Unsat);
}

// =============================================================================
// Clause Construction
// =============================================================================

#[test]
fn test_zero_literals_are_dropped() {
    let solver = solver_with(&[&[1, 0, 2, 0]]);
    assert_eq!(solver.clauses()[0].literals.len(), 2);
}

#[test]
fn test_empty_raw_clause_is_skipped() {
    let mut solver = solver_with(&[&[], &[0, 0]]);
    assert!(solver.clauses().is_empty());
    assert!(solver.solve().is_sat());
}

#[test]
fn test_unrepresentable_variable_is_rejected() {
    let mut solver = CdclSolver::new();
    assert!(solver.add_clause(&[1, i64::MIN]).is_err());
}

#[test]
fn test_duplicate_literals_are_deduplicated() {
    let solver = solver_with(&[&[5, 5, 5]]);
    assert_eq!(solver.clauses()[0].literals.len(), 1);
}

#[test]
fn test_duplicate_literals_kept_when_configured() {
    let mut solver = CdclSolver::with_config(CdclConfig {
        dedup_literals: false,
        ..CdclConfig::default()
    });
    solver.add_clause(&[5, 5]).unwrap();
    assert_eq!(solver.clauses()[0].literals.len(), 2);

    // A duplicated literal must still propagate as a unit.
    match solver.solve() {
        SatResult::Sat(model) => assert_eq!(model.get(&5), Some(&true)),
        other => panic!("expected SAT, got {other:?}"),
    }
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[test]
fn test_scenario_forced_contradiction() {
    assert_eq!(solve(&[&[1, 2], &[-1, 2], &[-2]]), SatResult::Unsat);
}

#[test]
fn test_scenario_simple_sat() {
    let clauses: &[&[i64]] = &[&[1, 2], &[-1, 3], &[-2, -3]];
    match solve(clauses) {
        SatResult::Sat(model) => assert_satisfies(&model, clauses),
        other => panic!("expected SAT, got {other:?}"),
    }
}

#[test]
fn test_scenario_unit_chain() {
    let clauses: &[&[i64]] = &[&[1], &[-1, 2], &[-2, 3], &[-3, 4]];
    match solve(clauses) {
        SatResult::Sat(model) => {
            for var in 1..=4 {
                assert_eq!(model.get(&var), Some(&true), "variable {var}");
            }
        }
        other => panic!("expected SAT, got {other:?}"),
    }
}

#[test]
fn test_scenario_pigeonhole_three_into_two() {
    // p(i, h) = pigeon i sits in hole h.
    let clauses: &[&[i64]] = &[
        &[1, 2],
        &[3, 4],
        &[5, 6],
        &[-1, -3],
        &[-1, -5],
        &[-3, -5],
        &[-2, -4],
        &[-2, -6],
        &[-4, -6],
    ];
    assert_eq!(solve(clauses), SatResult::Unsat);
}

#[test]
fn test_scenario_odd_xor_cycle() {
    let clauses: &[&[i64]] = &[&[1, 2], &[-1, -2], &[2, 3], &[-2, -3], &[3, 1], &[-3, -1]];
    assert_eq!(solve(clauses), SatResult::Unsat);
}

// =============================================================================
// Search Behavior
// =============================================================================

#[test]
fn test_unit_chain_needs_no_decisions() {
    let mut solver = solver_with(&[&[1], &[-1, 2], &[-2, 3], &[-3, 4]]);
    assert!(solver.solve().is_sat());

    let stats = solver.stats();
    assert_eq!(stats.decisions, 0);
    assert_eq!(stats.propagations, 4);

    // Everything was forced during root propagation.
    assert!(solver.trail().entries().iter().all(|e| e.level == 0));
    assert!(solver.trail().entries().iter().all(|e| e.reason.is_some()));
}

#[test]
fn test_conflicts_produce_learned_clauses() {
    let mut solver = solver_with(&[
        &[1, 2],
        &[3, 4],
        &[5, 6],
        &[-1, -3],
        &[-1, -5],
        &[-3, -5],
        &[-2, -4],
        &[-2, -6],
        &[-4, -6],
    ]);
    assert_eq!(solver.solve(), SatResult::Unsat);

    let stats = solver.stats();
    assert!(stats.conflicts > 0);
    assert_eq!(
        stats.learned_clauses as usize,
        solver.clauses().iter().filter(|c| c.learned).count()
    );
    assert!(stats.learned_clauses > 0);
}

#[test]
fn test_identical_inputs_give_identical_models() {
    let clauses: &[&[i64]] = &[&[1, 2], &[-1, 3], &[-2, -3], &[4, -3, 1]];
    let a = solve(clauses);
    let b = solve(clauses);
    assert_eq!(a, b);
}

#[test]
fn test_assignment_covers_every_mentioned_variable() {
    let mut solver = solver_with(&[&[7, 9], &[-9, 12]]);
    assert!(solver.solve().is_sat());

    let model = solver.assignment();
    for var in [7, 9, 12] {
        assert!(model.contains_key(&var), "variable {var} missing");
    }
    assert_eq!(model.len(), 3);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_restores_construction_state() {
    let mut solver = solver_with(&[&[1, 2], &[-1], &[-2]]);
    assert_eq!(solver.solve(), SatResult::Unsat);

    solver.reset();

    assert!(solver.clauses().is_empty());
    assert_eq!(solver.num_vars(), 0);
    assert_eq!(solver.decision_level(), 0);
    assert!(solver.trail().is_empty());
    assert!(solver.assignment().is_empty());
    assert_eq!(solver.stats(), CdclSolver::new().stats());
}

#[test]
fn test_reset_is_idempotent() {
    let mut solver = solver_with(&[&[1], &[2, 3]]);
    assert!(solver.solve().is_sat());

    solver.reset();
    solver.reset();

    assert!(solver.clauses().is_empty());
    assert!(solver.trail().is_empty());
}

#[test]
fn test_solver_is_reusable_after_reset() {
    let mut solver = solver_with(&[&[1], &[-1]]);
    assert_eq!(solver.solve(), SatResult::Unsat);

    solver.reset();
    solver.add_clause(&[1]).unwrap();

    match solver.solve() {
        SatResult::Sat(model) => assert_eq!(model.get(&1), Some(&true)),
        other => panic!("expected SAT, got {other:?}"),
    }
}
