use super::outputs::OptimisationResult;
use super::outputs::SearchStatistics;
use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::statistic_logging::log_statistic_postfix;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::SearchExecutionFlag;
use crate::branching::Brancher;
use crate::branching::DefaultBrancher;
use crate::constraints::ConstraintPoster;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::Literal;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::SharedIncumbent;
use crate::engine::SolverParameters;
use crate::objective::Objective;
use crate::options::SolverOptions;
use crate::print_timetabler_assert_warning_message;
use crate::propagators::CardinalityConstraint;
use crate::propagators::ConstraintId;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and maximising an objective.
///
/// ```rust
/// # use timetabler::constraints;
/// # use timetabler::objective::Objective;
/// # use timetabler::results::OptimisationResult;
/// # use timetabler::termination::Indefinite;
/// # use timetabler::Solver;
/// let mut solver = Solver::default();
///
/// // We create three variables and require exactly one of them to be 1
/// let variables = solver
///     .new_literals()
///     .take(3)
///     .map(|literal| literal.variable())
///     .collect::<Vec<_>>();
/// solver
///     .add_constraint(constraints::exactly_one(variables.clone()))
///     .post()
///     .expect("no root-level conflict");
///
/// // The objective weighs every variable
/// solver.set_objective(Objective::new(vec![2, 7, 4]));
///
/// let mut brancher = solver.default_brancher();
/// let result = solver.maximise(&mut brancher, &mut Indefinite);
///
/// if let OptimisationResult::Optimal(solution) = result {
///     assert_eq!(solution.objective_value(), 7);
///     assert!(solution.get_value(variables[1]));
/// }
/// ```
#[derive(Debug)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    satisfaction_solver: ConstraintSatisfactionSolver,
    options: SolverOptions,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::with_options(SolverOptions::default())
    }
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(options: SolverOptions) -> Self {
        print_timetabler_assert_warning_message!();

        Solver {
            satisfaction_solver: ConstraintSatisfactionSolver::new(SolverParameters {
                bound_strategy: options.bound,
            }),
            options,
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Logs the statistics currently present in the solver with the provided objective value.
    pub fn log_statistics_with_objective(&self, objective_value: i64) {
        log_statistic("objective", objective_value);
        self.log_statistics();
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.satisfaction_solver.log_statistics();
        log_statistic_postfix();
    }

    /// The statistics of every search performed by this solver so far.
    pub fn statistics(&self) -> SearchStatistics {
        let counters = self.satisfaction_solver.counters();

        SearchStatistics {
            nodes: counters.num_nodes,
            branches: counters.num_decisions,
            conflicts: counters.num_conflicts,
            pruned: counters.num_pruned,
            solutions: counters.num_solutions,
            propagations: counters.num_propagations,
            elapsed: counters.time_spent_in_solver,
            budget_exhausted: false,
        }
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the value of the given [`Literal`] at the root level (after propagation), which could
    /// be unassigned.
    pub fn get_literal_value(&self, literal: Literal) -> Option<bool> {
        self.satisfaction_solver.get_literal_value(literal)
    }

    pub fn num_variables(&self) -> usize {
        self.satisfaction_solver.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.satisfaction_solver.num_constraints()
    }

    /// Whether a constraint caused a conflict at the root, in which case no solution exists.
    pub fn is_infeasible(&self) -> bool {
        self.satisfaction_solver.state.is_infeasible()
    }

    pub fn objective(&self) -> &Objective {
        self.satisfaction_solver.objective()
    }
}

/// Functions to create and retrieve variables.
impl Solver {
    /// Returns an infinite iterator of positive literals of new variables. The new variables will
    /// be unnamed.
    ///
    /// # Example
    /// ```
    /// # use timetabler::Solver;
    /// let mut solver = Solver::default();
    /// let literals: Vec<_> = solver.new_literals().take(5).collect();
    ///
    /// assert_eq!(literals.len(), 5);
    /// assert_eq!(solver.num_variables(), 5);
    /// ```
    pub fn new_literals(&mut self) -> impl Iterator<Item = Literal> + '_ {
        std::iter::from_fn(|| Some(self.new_literal()))
    }

    /// Create a fresh boolean variable and return the literal with positive polarity.
    pub fn new_literal(&mut self) -> Literal {
        Literal::new(self.satisfaction_solver.create_new_variable(), true)
    }

    /// Sets the objective to maximise. Variables without a coefficient contribute nothing.
    pub fn set_objective(&mut self, objective: Objective) {
        self.satisfaction_solver.set_objective(objective)
    }
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Maximises the objective subject to the constraints currently in the [`Solver`], or until
    /// the provided [`TerminationCondition`] indicates to stop.
    ///
    /// It returns an [`OptimisationResult`] which can be used to retrieve the optimal solution if
    /// it exists. Among solutions of equal objective value, the first one found is returned.
    pub fn maximise(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> OptimisationResult {
        self.maximise_under_assumptions(brancher, termination, &[])
    }

    /// Maximises the objective over the solutions in which every assumption holds.
    ///
    /// [`OptimisationResult::Unsatisfiable`] then means that no solution satisfies the
    /// assumptions. The solver returns to its root state afterwards, so it can be queried again
    /// with other assumptions.
    pub fn maximise_under_assumptions(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        assumptions: &[Literal],
    ) -> OptimisationResult {
        let incumbent = SharedIncumbent::default();
        let flag = self.maximise_with_incumbent(brancher, termination, assumptions, &incumbent, 0);

        match (flag, incumbent.into_solution()) {
            (SearchExecutionFlag::Exhausted, Some(solution)) => {
                OptimisationResult::Optimal(solution)
            }
            (SearchExecutionFlag::Exhausted, None) => OptimisationResult::Unsatisfiable,
            (SearchExecutionFlag::Timeout, Some(solution)) => {
                OptimisationResult::Satisfiable(solution)
            }
            (SearchExecutionFlag::Timeout, None) => OptimisationResult::Unknown,
        }
    }

    /// Searches for solutions improving on the incumbent, which may be shared with other
    /// searches.
    pub(crate) fn maximise_with_incumbent(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        assumptions: &[Literal],
        incumbent: &SharedIncumbent,
        rank: usize,
    ) -> SearchExecutionFlag {
        self.satisfaction_solver.maximise_under_assumptions(
            assumptions,
            termination,
            brancher,
            incumbent,
            rank,
        )
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`] which adds the
    /// constraint when [`ConstraintPoster::post`] is called.
    ///
    /// If the poster is dropped without posting, the constraint _is not_ actually added to the
    /// solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use timetabler::constraints;
    /// # use timetabler::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_literal().variable();
    /// let b = solver.new_literal().variable();
    ///
    /// let _ = solver.add_constraint(constraints::at_most_one([a, b])).post();
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    /// Adds the constraint and propagates it at the root. If the root becomes inconsistent, a
    /// [`ConstraintOperationError`] is returned; subsequent calls will always return an error,
    /// and no modification of the solver will take place.
    pub(crate) fn add_cardinality_constraint(
        &mut self,
        constraint: CardinalityConstraint,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        self.satisfaction_solver.add_constraint(constraint)
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates an instance of the [`DefaultBrancher`] over the exactly-one constraints added so
    /// far.
    pub fn default_brancher(&self) -> DefaultBrancher {
        DefaultBrancher::most_constrained(self.satisfaction_solver.exactly_one_groups())
    }
}
