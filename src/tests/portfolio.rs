#![cfg(test)]
use std::num::NonZeroUsize;

use crate::extraction::extract;
use crate::model::Dimensions;
use crate::model::TimetableInstance;
use crate::model::TimetableModel;
use crate::options::SolverOptions;
use crate::results::TerminalState;
use crate::termination::Indefinite;
use crate::termination::NodeBudget;

fn options(num_workers: usize) -> SolverOptions {
    SolverOptions {
        num_workers: NonZeroUsize::new(num_workers).expect("at least one worker"),
        ..Default::default()
    }
}

fn random_model(seed: u64) -> TimetableModel {
    let dimensions = Dimensions::new(3, 4, 2, 2, 2).expect("valid dimensions");
    TimetableModel::new(TimetableInstance::random(dimensions, 0.4, seed).expect("valid density"))
}

#[test]
fn parallel_and_sequential_search_agree_on_the_optimum() {
    for seed in 0..4 {
        let model = random_model(seed);
        let sequential = crate::solve(&model, &options(1), Indefinite);
        let parallel = crate::solve(&model, &options(4), Indefinite);

        assert_eq!(parallel.state, TerminalState::Optimal, "seed {seed}");
        assert_eq!(
            parallel.objective_value(),
            sequential.objective_value(),
            "seed {seed}"
        );
        assert!(extract(&parallel, &model).is_ok());
    }
}

#[test]
fn parallel_search_returns_the_same_schedule_every_time() {
    for seed in 0..6 {
        let model = random_model(seed);
        let first = crate::solve(&model, &options(4), Indefinite);

        for _ in 0..20 {
            let again = crate::solve(&model, &options(4), Indefinite);

            assert_eq!(again.state, first.state, "seed {seed}");
            assert_eq!(again.solution, first.solution, "seed {seed}");
        }
    }
}

#[test]
fn the_schedule_does_not_depend_on_the_number_of_workers() {
    let model = random_model(3);
    let expected = crate::solve(&model, &options(2), Indefinite).solution;

    for num_workers in [3, 4, 8] {
        let outcome = crate::solve(&model, &options(num_workers), Indefinite);

        assert_eq!(outcome.solution, expected, "{num_workers} workers");
    }
}

#[test]
fn the_sample_week_is_solved_in_parallel() {
    let model = TimetableModel::new(TimetableInstance::sample());
    let outcome = crate::solve(&model, &options(3), Indefinite);

    assert_eq!(outcome.state, TerminalState::Optimal);
    assert_eq!(outcome.objective_value(), Some(5));
    assert!(outcome.statistics.nodes > 0);
}

#[test]
fn an_infeasible_instance_is_reported_in_parallel() {
    let dimensions = Dimensions::new(1, 3, 1, 2, 1).expect("valid dimensions");
    let model = TimetableModel::new(
        TimetableInstance::random(dimensions, 0.5, 0).expect("valid density"),
    );
    let outcome = crate::solve(&model, &options(2), Indefinite);

    assert_eq!(outcome.state, TerminalState::Infeasible);
    assert_eq!(outcome.solution, None);
}

#[test]
fn an_exhausted_worker_budget_is_never_optimal() {
    let model = TimetableModel::new(TimetableInstance::sample());
    let outcome = crate::solve(&model, &options(2), NodeBudget::new(2));

    assert_ne!(outcome.state, TerminalState::Optimal);
    assert!(outcome.statistics.budget_exhausted);
}

#[test]
fn a_single_subject_falls_back_to_sequential_search() {
    let dimensions = Dimensions::new(1, 1, 1, 1, 1).expect("valid dimensions");
    let model = TimetableModel::new(
        TimetableInstance::random(dimensions, 1.0, 0).expect("valid density"),
    );
    let outcome = crate::solve(&model, &options(4), Indefinite);

    assert_eq!(outcome.state, TerminalState::Optimal);
    assert_eq!(outcome.objective_value(), Some(1));
}
