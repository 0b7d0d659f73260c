pub mod outputs;
mod portfolio;
pub(crate) mod solver;

use std::time::Instant;

use log::debug;
use log::info;

use self::outputs::SolveOutcome;
use crate::engine::termination::TerminationCondition;
use crate::model::TimetableModel;
use crate::options::SolverOptions;

/// Maximises the preference satisfaction of the model.
///
/// With [`SolverOptions::num_workers`] larger than one, the root is split into disjoint cubes
/// which are searched by parallel workers sharing their best solution. Every worker queries
/// its own clone of the termination condition.
///
/// The outcome never holds a partial schedule: either a solution which satisfies every hard
/// constraint, or none.
pub fn solve<T>(model: &TimetableModel, options: &SolverOptions, termination: T) -> SolveOutcome
where
    T: TerminationCondition + Clone + Send,
{
    let start_time = Instant::now();

    let mut outcome = if options.num_workers.get() > 1 {
        portfolio::solve_in_parallel(model, options, termination)
    } else {
        solve_sequentially(model, options, termination)
    };
    outcome.statistics.elapsed = start_time.elapsed();

    info!(
        "Solve ended {} with objective {:?} after {} nodes",
        outcome.state,
        outcome.objective_value(),
        outcome.statistics.nodes
    );

    outcome
}

pub(crate) fn solve_sequentially(
    model: &TimetableModel,
    options: &SolverOptions,
    mut termination: impl TerminationCondition,
) -> SolveOutcome {
    let mut solver = model.create_solver(options);
    let mut brancher = model.create_brancher(options.search_strategy);

    debug!(
        "Searching sequentially over {} variables",
        solver.num_variables()
    );
    let result = solver.maximise(&mut brancher, &mut termination);

    SolveOutcome::from_result(result, solver.statistics())
}
