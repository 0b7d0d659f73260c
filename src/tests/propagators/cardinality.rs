#![cfg(test)]
use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestSolver;
use crate::engine::variables::Literal;
use crate::propagators::CardinalityConstraint;

#[test]
fn a_true_variable_clears_the_rest_of_an_exactly_one_group() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(4);
    let constraint = CardinalityConstraint::ExactlyOne(group.clone().into());

    solver.set(group[2], true);
    let result = solver.propagate(&constraint);

    assert!(result.is_ok());
    solver.assert_values(
        &group,
        &[Some(false), Some(false), Some(true), Some(false)],
    );
    assert!(constraint.is_satisfied(&solver.assignments));
}

#[test]
fn the_last_candidate_of_an_exactly_one_group_is_forced() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(3);
    let constraint = CardinalityConstraint::ExactlyOne(group.clone().into());

    solver.set(group[0], false);
    assert_eq!(Ok(vec![]), solver.forced_by(&constraint));

    solver.set(group[2], false);
    assert_eq!(
        Ok(vec![Literal::new(group[1], true)]),
        solver.forced_by(&constraint)
    );
}

#[test]
fn at_most_one_does_not_force_the_last_candidate() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(3);
    let constraint = CardinalityConstraint::AtMostOne(group.clone().into());

    solver.set(group[0], false);
    solver.set(group[1], false);
    let result = solver.propagate(&constraint);

    assert!(result.is_ok());
    assert_eq!(None, solver.value(group[2]));
    assert!(constraint.is_satisfied(&solver.assignments));
}

#[test]
fn at_most_one_clears_the_group_after_a_true_variable() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(3);
    let constraint = CardinalityConstraint::AtMostOne(group.clone().into());

    solver.set(group[1], true);
    let result = solver.propagate(&constraint);

    assert!(result.is_ok());
    solver.assert_values(&group, &[Some(false), Some(true), Some(false)]);
}

#[test]
fn two_true_variables_are_a_conflict() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(3);

    solver.set(group[0], true);
    solver.set(group[2], true);

    for constraint in [
        CardinalityConstraint::AtMostOne(group.clone().into()),
        CardinalityConstraint::ExactlyOne(group.clone().into()),
    ] {
        assert!(constraint.is_violated(&solver.assignments));
        assert_eq!(
            Err(Inconsistency::TooManyTrue),
            solver.propagate(&constraint)
        );
    }
}

#[test]
fn an_exactly_one_group_without_candidates_is_a_conflict() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(2);
    let constraint = CardinalityConstraint::ExactlyOne(group.clone().into());

    solver.set(group[0], false);
    solver.set(group[1], false);

    assert!(constraint.is_violated(&solver.assignments));
    assert_eq!(
        Err(Inconsistency::NoCandidate),
        solver.forced_by(&constraint)
    );
}

#[test]
fn overlapping_groups_propagate_through_each_other() {
    let mut solver = TestSolver::default();
    let variables = solver.new_variables(3);
    let subject = CardinalityConstraint::ExactlyOne([variables[0], variables[1]].into());
    let hall = CardinalityConstraint::AtMostOne([variables[1], variables[2]].into());

    solver.set(variables[2], true);
    assert!(solver.propagate(&hall).is_ok());
    assert!(solver.propagate(&subject).is_ok());

    solver.assert_values(&variables, &[Some(true), Some(false), Some(true)]);
}

#[test]
fn an_open_group_forces_nothing() {
    let mut solver = TestSolver::default();
    let group = solver.new_variables(5);
    let constraint = CardinalityConstraint::ExactlyOne(group.clone().into());

    assert_eq!(Ok(vec![]), solver.forced_by(&constraint));
    assert!(!constraint.is_violated(&solver.assignments));
    assert!(!constraint.is_satisfied(&solver.assignments));
}
