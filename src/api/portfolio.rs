//! Splits the search at the root into disjoint cubes which are searched by a pool of scoped
//! worker threads. The workers share nothing but the incumbent: its objective prunes every
//! worker's search, and among solutions of equal objective the one of the lowest cube index is
//! kept.
use std::panic;
use std::thread;

use log::debug;

use super::outputs::SearchStatistics;
use super::outputs::SolveOutcome;
use super::outputs::TerminalState;
use crate::basic_types::SearchExecutionFlag;
use crate::engine::termination::TerminationCondition;
use crate::engine::SharedIncumbent;
use crate::model::TimetableModel;
use crate::options::SolverOptions;
use crate::variables::Literal;

#[derive(Debug)]
struct WorkerReport {
    timed_out: bool,
    statistics: SearchStatistics,
}

pub(crate) fn solve_in_parallel<T>(
    model: &TimetableModel,
    options: &SolverOptions,
    termination: T,
) -> SolveOutcome
where
    T: TerminationCondition + Clone + Send,
{
    let root = model.create_solver(options);
    if root.is_infeasible() {
        return SolveOutcome {
            state: TerminalState::Infeasible,
            solution: None,
            statistics: root.statistics(),
        };
    }

    let cubes = model.root_cubes(&root);
    if cubes.len() < 2 {
        debug!("The root has {} cubes, searching sequentially", cubes.len());
        return super::solve_sequentially(model, options, termination);
    }

    let num_workers = options.num_workers.get().min(cubes.len());
    debug!(
        "Searching {} cubes with {num_workers} workers",
        cubes.len()
    );

    let incumbent = SharedIncumbent::default();
    let reports = thread::scope(|scope| {
        let handles = (0..num_workers)
            .map(|worker| {
                let termination = termination.clone();
                let cubes = &cubes;
                let incumbent = &incumbent;
                scope.spawn(move || {
                    run_worker(
                        worker,
                        num_workers,
                        model,
                        options,
                        cubes,
                        termination,
                        incumbent,
                    )
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            })
            .collect::<Vec<_>>()
    });

    let mut statistics = SearchStatistics::default();
    let mut timed_out = false;
    for report in &reports {
        statistics.merge(&report.statistics);
        timed_out |= report.timed_out;
    }
    statistics.budget_exhausted = timed_out;

    let solution = incumbent.into_solution();
    let state = match (&solution, timed_out) {
        (Some(_), false) => TerminalState::Optimal,
        (Some(_), true) => TerminalState::Feasible,
        (None, _) => TerminalState::Infeasible,
    };

    SolveOutcome {
        state,
        solution,
        statistics,
    }
}

/// Searches the cubes `worker`, `worker + num_workers`, ... in order, on a solver of its own.
fn run_worker(
    worker: usize,
    num_workers: usize,
    model: &TimetableModel,
    options: &SolverOptions,
    cubes: &[Literal],
    mut termination: impl TerminationCondition,
    incumbent: &SharedIncumbent,
) -> WorkerReport {
    let mut solver = model.create_solver(options);
    let mut brancher = model.create_brancher(options.search_strategy);

    let mut timed_out = false;
    for (rank, &cube) in cubes.iter().enumerate().skip(worker).step_by(num_workers) {
        let flag =
            solver.maximise_with_incumbent(&mut brancher, &mut termination, &[cube], incumbent, rank);

        if flag == SearchExecutionFlag::Timeout {
            debug!(
                "Worker {worker} stopped in cube {rank}, a solution is known: {}",
                incumbent.has_solution()
            );
            timed_out = true;
            break;
        }
    }

    WorkerReport {
        timed_out,
        statistics: solver.statistics(),
    }
}
