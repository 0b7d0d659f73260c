pub(crate) mod assignments;
pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod incumbent;
pub(crate) mod termination;
pub(crate) mod variables;

mod propagator_queue;
pub(crate) mod test_helper;
pub(crate) mod watch_list;

pub(crate) use assignments::EmptyDomain;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use constraint_satisfaction_solver::SolverParameters;
pub(crate) use incumbent::SharedIncumbent;
