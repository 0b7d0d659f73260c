//! Houses the solver which maximises a linear objective over boolean variables subject to
//! cardinality constraints, using depth-first branch-and-bound with propagation.

use std::cmp::min;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::trace;

use super::assignments::Assignments;
use super::assignments::ReadAssignment;
use super::incumbent::SharedIncumbent;
use super::propagator_queue::PropagatorQueue;
use super::termination::TerminationCondition;
use super::variables::Literal;
use super::variables::VariableId;
use super::watch_list::BooleanDomainEvent;
use super::watch_list::WatchList;
use crate::api::outputs::Solution;
use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::basic_types::SearchExecutionFlag;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::objective::ExclusivePartition;
use crate::objective::Objective;
use crate::options::BoundStrategy;
use crate::propagators::CardinalityConstraint;
use crate::propagators::ConstraintId;
use crate::timetabler_assert_advanced;
use crate::timetabler_assert_extreme;
use crate::timetabler_assert_moderate;
use crate::timetabler_assert_simple;
#[cfg(doc)]
use crate::Solver;

/// A solver which maximises a linear objective over boolean variables subject to
/// [`CardinalityConstraint`]s.
///
/// The search is a depth-first branch-and-bound over an explicit stack of [`SearchNode`]s. At
/// every node the termination condition is checked, after which the constraints propagate to a
/// fixpoint. The node then either
/// - is a conflict, and the solver backtracks;
/// - assigns every variable, in which case the solution is offered to the incumbent;
/// - has an upper bound on the objective which does not exceed the incumbent, and is pruned
///   (on equality only if the incumbent was found by a search of no higher rank);
/// - or is branched on, trying the literal chosen by the [`Brancher`] before its negation.
///
/// Assignments made by propagation at the root (while adding constraints) are permanent; every
/// search returns the solver to that root state, so it can be queried repeatedly, for instance
/// under different assumptions (see [`Solver::maximise_under_assumptions`]).
#[derive(Debug)]
pub(crate) struct ConstraintSatisfactionSolver {
    /// The solver continuously changes states during the search.
    /// The state helps track additional information and contributes to making the code clearer.
    pub(crate) state: CSPSolverState,
    /// The current partial assignment and the trail used to undo it.
    pub(crate) assignments: Assignments,
    /// The constraints; a [`ConstraintId`] indexes this list.
    constraints: Vec<CardinalityConstraint>,
    /// Which constraints to enqueue upon the assignment of a variable.
    watch_list: WatchList,
    /// Dictates the order in which constraints will be called to propagate.
    propagator_queue: PropagatorQueue,
    /// The next entry on the trail of which the watchers still need to be notified.
    propagation_trail_index: usize,
    /// The objective which is maximised.
    objective: Objective,
    /// The exactly-one groups of the constraints, used by the bound.
    partition: ExclusivePartition,
    /// The open search nodes, from the root down to the current node.
    nodes: Vec<SearchNode>,
    /// Buffer for the literals forced by a single propagation.
    forced: Vec<Literal>,
    /// Tracks information about the search.
    counters: Counters,
    internal_parameters: SolverParameters,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SolverParameters {
    pub(crate) bound_strategy: BoundStrategy,
}

/// How the literal of a [`SearchNode`] came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    /// Imposed by the caller; never flipped.
    Assumption,
    /// The literal chosen by the brancher; its negation is still to be explored.
    Left,
    /// The negation of a refuted left branch.
    Right,
}

#[derive(Clone, Copy, Debug)]
struct SearchNode {
    literal: Literal,
    /// The length of the trail before the literal was assigned.
    trail_position: usize,
    branch: Branch,
}

impl Default for ConstraintSatisfactionSolver {
    fn default() -> Self {
        ConstraintSatisfactionSolver::new(SolverParameters::default())
    }
}

impl ConstraintSatisfactionSolver {
    pub(crate) fn new(internal_parameters: SolverParameters) -> Self {
        ConstraintSatisfactionSolver {
            state: CSPSolverState::default(),
            assignments: Assignments::default(),
            constraints: vec![],
            watch_list: WatchList::default(),
            propagator_queue: PropagatorQueue::default(),
            propagation_trail_index: 0,
            objective: Objective::default(),
            partition: ExclusivePartition::default(),
            nodes: vec![],
            forced: vec![],
            counters: Counters::default(),
            internal_parameters,
        }
    }

    pub(crate) fn create_new_variable(&mut self) -> VariableId {
        self.watch_list.grow();
        self.assignments.grow()
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.assignments.num_variables()
    }

    pub(crate) fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub(crate) fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    pub(crate) fn objective(&self) -> &Objective {
        &self.objective
    }

    pub(crate) fn get_literal_value(&self, literal: Literal) -> Option<bool> {
        self.assignments.literal_value(literal)
    }

    fn exactly_one_constraints(&self) -> impl Iterator<Item = &[VariableId]> + '_ {
        self.constraints
            .iter()
            .filter_map(|constraint| match constraint {
                CardinalityConstraint::ExactlyOne(variables) => Some(&variables[..]),
                CardinalityConstraint::AtMostOne(_) => None,
            })
    }

    /// The variable groups of the exactly-one constraints, in the order they were added.
    pub(crate) fn exactly_one_groups(&self) -> Vec<Box<[VariableId]>> {
        self.exactly_one_constraints().map(Box::from).collect()
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }

    pub(crate) fn log_statistics(&self) {
        self.counters.log_statistics()
    }

    /// Adds the constraint and propagates it at the root.
    ///
    /// If the root becomes inconsistent, a [`ConstraintOperationError`] is returned and every
    /// subsequent call returns an error without modifying the solver.
    pub(crate) fn add_constraint(
        &mut self,
        constraint: CardinalityConstraint,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        timetabler_assert_moderate!(self.nodes.is_empty());

        if self.state.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        if let Some(unknown) = constraint
            .variables()
            .iter()
            .find(|variable| variable.index() >= self.num_variables())
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown.index()));
        }

        let constraint_id = ConstraintId::new(self.constraints.len() as u32);
        let events = constraint.watched_events();
        for &variable in constraint.variables() {
            self.watch_list.watch(variable, constraint_id, events);
        }

        trace!(
            "Adding {} over {} variables as {constraint_id}",
            constraint.name(),
            constraint.variables().len()
        );
        self.constraints.push(constraint);
        self.propagator_queue.grow();
        self.propagator_queue.enqueue_propagator(constraint_id);

        self.propagate_enqueued();

        if self.state.conflicting() {
            self.state.declare_infeasible();
            return Err(ConstraintOperationError::InfeasibleConstraint);
        }

        Ok(constraint_id)
    }

    /// Searches for a solution which improves on `incumbent`, with the `assumptions` imposed on
    /// top of the root. Improving solutions are installed into the incumbent with the given
    /// `rank`. The solver is returned to the root state afterwards.
    pub(crate) fn maximise_under_assumptions(
        &mut self,
        assumptions: &[Literal],
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
        incumbent: &SharedIncumbent,
        rank: usize,
    ) -> SearchExecutionFlag {
        let start_time = Instant::now();

        let flag = self.maximise_internal(assumptions, termination, brancher, incumbent, rank);
        self.restore_state_at_root(brancher);

        self.counters.time_spent_in_solver += start_time.elapsed();
        flag
    }

    fn maximise_internal(
        &mut self,
        assumptions: &[Literal],
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
        incumbent: &SharedIncumbent,
        rank: usize,
    ) -> SearchExecutionFlag {
        if self.state.is_infeasible() {
            return SearchExecutionFlag::Exhausted;
        }

        self.state.declare_solving();
        self.partition =
            ExclusivePartition::new(self.num_variables(), self.exactly_one_constraints());

        for &assumption in assumptions {
            if !self.enqueue_assumption_literal(assumption) {
                debug!("Assumption {assumption} is falsified at the root");
                self.state.declare_exhausted();
                return SearchExecutionFlag::Exhausted;
            }
        }

        loop {
            self.counters.num_nodes += 1;

            if termination.should_stop() {
                self.state.declare_timeout();
                return SearchExecutionFlag::Timeout;
            }

            self.state.declare_propagating();
            self.propagate_enqueued();

            if self.state.conflicting() {
                if self.nodes.is_empty() {
                    self.state.declare_infeasible();
                    return SearchExecutionFlag::Exhausted;
                }
            } else if self.assignments.num_unassigned() == 0 {
                self.process_solution(incumbent, rank);
            } else if incumbent.dominates(self.upper_bound(), rank) {
                self.counters.num_pruned += 1;
                self.state.declare_pruned();
            } else {
                self.state.declare_branching();
                self.enqueue_next_decision(brancher);
                continue;
            }

            if !self.backtrack(brancher) {
                self.state.declare_exhausted();
                return SearchExecutionFlag::Exhausted;
            }
        }
    }

    fn upper_bound(&self) -> i64 {
        self.objective.upper_bound(
            &self.assignments,
            self.internal_parameters.bound_strategy,
            &self.partition,
        )
    }

    fn process_solution(&mut self, incumbent: &SharedIncumbent, rank: usize) {
        timetabler_assert_advanced!(self
            .constraints
            .iter()
            .all(|constraint| constraint.is_satisfied(&self.assignments)));

        self.state.declare_solution_found();

        let objective_value = self.objective.evaluate(&self.assignments);
        let assignments = &self.assignments;
        let installed = incumbent.try_install(objective_value, rank, || {
            Solution::from_assignment(assignments, objective_value)
        });

        if installed {
            self.counters.num_solutions += 1;
            debug!(
                "Found an improving solution with objective {objective_value} after {} nodes",
                self.counters.num_nodes
            );
        }
    }

    /// Makes the assumption literal true in a new search node. Returns `false` if the literal is
    /// already falsified.
    fn enqueue_assumption_literal(&mut self, assumption: Literal) -> bool {
        if self.assignments.literal_value(assumption) == Some(false) {
            return false;
        }

        self.push_node(assumption, Branch::Assumption);
        true
    }

    fn enqueue_next_decision(&mut self, brancher: &mut impl Brancher) {
        let context = SelectionContext::new(&self.assignments);
        let decision = brancher.next_decision(&context).or_else(|| {
            self.assignments
                .first_unassigned()
                .map(|variable| Literal::new(variable, true))
        });

        let Some(decision) = decision else {
            unreachable!("a node with unassigned variables always has a decision")
        };

        self.counters.num_decisions += 1;
        self.push_node(decision, Branch::Left);
    }

    fn push_node(&mut self, literal: Literal, branch: Branch) {
        timetabler_assert_simple!(
            branch == Branch::Assumption || !self.assignments.is_fixed(literal.variable()),
            "decisions are only made over unassigned variables"
        );

        let trail_position = self.assignments.num_trail_entries();
        self.nodes.push(SearchNode {
            literal,
            trail_position,
            branch,
        });

        let result = self.assignments.assign(literal, true);
        timetabler_assert_simple!(result.is_ok());
        // An assumption which already holds leaves no trail entry.
        timetabler_assert_moderate!(
            self.assignments.num_trail_entries() == trail_position
                || self.assignments.is_decision(trail_position)
        );
    }

    /// Pops nodes until a left branch is found, which is replaced by its negation. Returns
    /// `false` if no such branch is left, i.e. the search below the assumptions is exhausted.
    fn backtrack(&mut self, brancher: &mut impl Brancher) -> bool {
        while let Some(node) = self.nodes.pop() {
            self.undo_trail(node.trail_position, brancher);

            match node.branch {
                Branch::Assumption => return false,
                Branch::Right => continue,
                Branch::Left => {
                    self.state.declare_backtracked();
                    self.counters.num_decisions += 1;
                    self.push_node(!node.literal, Branch::Right);
                    return true;
                }
            }
        }

        false
    }

    fn undo_trail(&mut self, trail_position: usize, brancher: &mut impl Brancher) {
        self.assignments
            .undo_trail(trail_position, |literal| brancher.on_unassign_literal(literal));
        self.propagation_trail_index = min(self.propagation_trail_index, trail_position);
        self.propagator_queue.clear();
    }

    /// Undoes every search node, keeping only the assignments made at the root.
    pub(crate) fn restore_state_at_root(&mut self, brancher: &mut impl Brancher) {
        if let Some(root_position) = self.nodes.first().map(|node| node.trail_position) {
            self.undo_trail(root_position, brancher);
        }
        self.nodes.clear();
        self.propagator_queue.clear();

        if !self.state.is_infeasible() {
            self.state.declare_ready();
        }
    }

    /// Propagates the enqueued constraints until a fixpoint or a conflict is reached. A conflict
    /// leaves the solver in the conflicting state.
    pub(crate) fn propagate_enqueued(&mut self) {
        loop {
            self.notify_watchers();

            let Some(constraint_id) = self.propagator_queue.pop() else {
                break;
            };

            self.counters.num_propagations += 1;

            self.forced.clear();
            let status = self.constraints[constraint_id.index()]
                .propagate(&self.assignments, &mut self.forced)
                .and_then(|()| self.apply_forced());

            if let Err(inconsistency) = status {
                trace!("{constraint_id} detected {inconsistency:?}");
                self.counters.num_conflicts += 1;
                self.propagator_queue.clear();
                self.state.declare_conflict(inconsistency);
                return;
            }
        }

        timetabler_assert_simple!(self.propagator_queue.is_empty());
        timetabler_assert_extreme!(self.is_at_fixpoint());
    }

    fn apply_forced(&mut self) -> PropagationStatus {
        for literal in self.forced.drain(..) {
            self.assignments.assign(literal, false)?;
        }

        Ok(())
    }

    fn notify_watchers(&mut self) {
        while self.propagation_trail_index < self.assignments.num_trail_entries() {
            let literal = self.assignments.trail_literal(self.propagation_trail_index);
            let event = BooleanDomainEvent::from_value(literal.is_positive());

            for constraint_id in self.watch_list.affected_constraints(literal.variable(), event) {
                self.propagator_queue.enqueue_propagator(constraint_id);
            }

            self.propagation_trail_index += 1;
        }
    }

    fn is_at_fixpoint(&self) -> bool {
        let mut forced = vec![];
        self.constraints.iter().all(|constraint| {
            forced.clear();
            constraint.propagate(&self.assignments, &mut forced).is_ok() && forced.is_empty()
        })
    }
}

/// Structure responsible for storing several statistics of the solving process of the
/// [`ConstraintSatisfactionSolver`].
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct Counters {
    pub(crate) num_nodes: u64,
    pub(crate) num_decisions: u64,
    pub(crate) num_conflicts: u64,
    pub(crate) num_pruned: u64,
    pub(crate) num_solutions: u64,
    pub(crate) num_propagations: u64,
    pub(crate) time_spent_in_solver: Duration,
}

impl Counters {
    fn log_statistics(&self) {
        log_statistic("numberOfNodes", self.num_nodes);
        log_statistic("numberOfDecisions", self.num_decisions);
        log_statistic("numberOfConflicts", self.num_conflicts);
        log_statistic("numberOfPrunedNodes", self.num_pruned);
        log_statistic("numberOfImprovingSolutions", self.num_solutions);
        log_statistic("numberOfPropagations", self.num_propagations);
        log_statistic(
            "timeSpentInSolverInMilliseconds",
            self.time_spent_in_solver.as_millis(),
        );
    }
}

#[derive(Default, Debug)]
enum CSPSolverStateInternal {
    #[default]
    Ready,
    Solving,
    Propagating,
    Branching,
    Conflict {
        #[allow(unused)]
        inconsistency: Inconsistency,
    },
    Pruned,
    SolutionFound,
    Backtracked,
    Exhausted,
    Infeasible,
    Timeout,
}

#[derive(Default, Debug)]
pub(crate) struct CSPSolverState {
    internal_state: CSPSolverStateInternal,
}

impl CSPSolverState {
    pub(crate) fn is_ready(&self) -> bool {
        matches!(self.internal_state, CSPSolverStateInternal::Ready)
    }

    pub(crate) fn conflicting(&self) -> bool {
        matches!(
            self.internal_state,
            CSPSolverStateInternal::Conflict { inconsistency: _ }
        )
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        matches!(self.internal_state, CSPSolverStateInternal::Infeasible)
    }

    fn is_searching(&self) -> bool {
        !matches!(
            self.internal_state,
            CSPSolverStateInternal::Ready
                | CSPSolverStateInternal::Exhausted
                | CSPSolverStateInternal::Infeasible
                | CSPSolverStateInternal::Timeout
        )
    }

    fn declare_ready(&mut self) {
        self.internal_state = CSPSolverStateInternal::Ready;
    }

    fn declare_solving(&mut self) {
        timetabler_assert_simple!(self.is_ready());
        self.internal_state = CSPSolverStateInternal::Solving;
    }

    fn declare_propagating(&mut self) {
        timetabler_assert_simple!(self.is_searching());
        self.internal_state = CSPSolverStateInternal::Propagating;
    }

    fn declare_branching(&mut self) {
        timetabler_assert_simple!(matches!(
            self.internal_state,
            CSPSolverStateInternal::Propagating
        ));
        self.internal_state = CSPSolverStateInternal::Branching;
    }

    fn declare_conflict(&mut self, inconsistency: Inconsistency) {
        timetabler_assert_simple!(!self.conflicting());
        self.internal_state = CSPSolverStateInternal::Conflict { inconsistency };
    }

    fn declare_pruned(&mut self) {
        self.internal_state = CSPSolverStateInternal::Pruned;
    }

    fn declare_solution_found(&mut self) {
        self.internal_state = CSPSolverStateInternal::SolutionFound;
    }

    fn declare_backtracked(&mut self) {
        timetabler_assert_simple!(matches!(
            self.internal_state,
            CSPSolverStateInternal::Conflict { .. }
                | CSPSolverStateInternal::Pruned
                | CSPSolverStateInternal::SolutionFound
        ));
        self.internal_state = CSPSolverStateInternal::Backtracked;
    }

    fn declare_exhausted(&mut self) {
        self.internal_state = CSPSolverStateInternal::Exhausted;
    }

    fn declare_infeasible(&mut self) {
        self.internal_state = CSPSolverStateInternal::Infeasible;
    }

    fn declare_timeout(&mut self) {
        self.internal_state = CSPSolverStateInternal::Timeout;
    }
}
