//! The timetabling model: the input instance, the decision variables and the constraints and
//! objective over them, from which a [`Solver`] can be constructed.
//!
//! ```rust
//! # use timetabler::model::TimetableInstance;
//! # use timetabler::model::TimetableModel;
//! # use timetabler::options::SolverOptions;
//! # use timetabler::termination::Indefinite;
//! let model = TimetableModel::new(TimetableInstance::sample());
//!
//! let outcome = timetabler::solve(&model, &SolverOptions::default(), Indefinite);
//! let report = timetabler::extraction::extract(&outcome, &model).expect("the week is feasible");
//!
//! assert_eq!(report.assignments().len(), 5);
//! ```

mod dimensions;
mod instance;
mod preferences;
mod variable_space;

use log::debug;
use thiserror::Error;

pub use dimensions::Dimension;
pub use dimensions::DimensionError;
pub use dimensions::Dimensions;
pub use instance::TimetableInstance;
pub use preferences::Preferences;
pub use variable_space::VariableKey;
pub use variable_space::VariableSpace;

use crate::branching::Brancher;
use crate::branching::DefaultBrancher;
use crate::branching::InDomainMax;
use crate::branching::IndependentVariableValueBrancher;
use crate::branching::InputOrder;
use crate::constraints::ConstraintRegistry;
use crate::objective::Objective;
use crate::options::SearchStrategy;
use crate::options::SolverOptions;
use crate::timetabler_assert_eq_simple;
use crate::variables::Literal;
use crate::variables::VariableId;
use crate::Solver;

/// Errors in the description of a timetabling instance.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InstanceError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error("the preferences must form a table of {professors} professors by {days} days by {slots} slots")]
    PreferenceShape {
        professors: usize,
        days: usize,
        slots: usize,
    },
    #[error("the preference of professor {professor} on day {day} in slot {slot} is {value}, expected 0 or 1")]
    PreferenceValue {
        professor: usize,
        day: usize,
        slot: usize,
        value: i64,
    },
    #[error("the preference density {0} is not a probability")]
    Density(f64),
}

/// The variables, constraints and objective of one timetabling instance. The model is
/// immutable; every solve builds its own [`Solver`] from it.
#[derive(Clone, Debug)]
pub struct TimetableModel {
    instance: TimetableInstance,
    space: VariableSpace,
    registry: ConstraintRegistry,
    objective: Objective,
}

impl TimetableModel {
    pub fn new(instance: TimetableInstance) -> TimetableModel {
        let space = VariableSpace::create(*instance.dimensions());
        let registry = ConstraintRegistry::for_timetable(&space);
        let objective = Objective::for_timetable(&space, instance.preferences());

        debug!(
            "Created a model with {} variables and {} constraints",
            space.len(),
            registry.len()
        );

        TimetableModel {
            instance,
            space,
            registry,
            objective,
        }
    }

    pub fn instance(&self) -> &TimetableInstance {
        &self.instance
    }

    pub fn space(&self) -> &VariableSpace {
        &self.space
    }

    pub fn registry(&self) -> &ConstraintRegistry {
        &self.registry
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Create a solver instance from this model.
    ///
    /// If the constraints are inconsistent at the root, the solver is left in its infeasible
    /// state and every search on it reports that no solution exists.
    pub fn create_solver(&self, options: &SolverOptions) -> Solver {
        let mut solver = Solver::with_options(*options);

        let variables = solver
            .new_literals()
            .take(self.space.len())
            .map(|literal| literal.variable())
            .collect::<Vec<_>>();
        timetabler_assert_eq_simple!(
            variables.last().map(|variable| variable.index() + 1),
            Some(self.space.len())
        );

        if let Err(error) = self.registry.post_all(&mut solver) {
            debug!("The timetable is infeasible at the root: {error}");
        }

        solver.set_objective(self.objective.clone());
        solver
    }

    /// The brancher which implements the search strategy over this model.
    pub fn create_brancher(&self, strategy: SearchStrategy) -> Box<dyn Brancher> {
        match strategy {
            SearchStrategy::MostConstrained => {
                Box::new(DefaultBrancher::most_constrained(self.space.subject_groups()))
            }
            SearchStrategy::InputOrder => {
                let variables = self
                    .space
                    .iter()
                    .map(|(variable, _)| variable)
                    .collect::<Vec<_>>();
                Box::new(IndependentVariableValueBrancher::new(
                    InputOrder::new(&variables),
                    InDomainMax,
                ))
            }
        }
    }

    /// Splits the search space at the root into disjoint cubes: one per open candidate of the
    /// undecided subject with the fewest open candidates, each setting that candidate to 1.
    ///
    /// Returns no cubes if every subject is decided at the root.
    pub fn root_cubes(&self, solver: &Solver) -> Vec<Literal> {
        let value = |variable: VariableId| solver.get_literal_value(Literal::new(variable, true));

        self.space
            .subject_groups()
            .into_iter()
            .filter(|group| group.iter().all(|&variable| value(variable) != Some(true)))
            .map(|group| {
                group
                    .iter()
                    .copied()
                    .filter(|&variable| value(variable).is_none())
                    .collect::<Vec<_>>()
            })
            .filter(|candidates| !candidates.is_empty())
            .min_by_key(Vec::len)
            .map(|candidates| {
                candidates
                    .into_iter()
                    .map(|variable| Literal::new(variable, true))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::TimetableInstance;
    use super::TimetableModel;
    use crate::model::Dimensions;
    use crate::model::Preferences;
    use crate::options::SolverOptions;

    #[test]
    fn solver_has_one_variable_per_key() {
        let model = TimetableModel::new(TimetableInstance::sample());

        let solver = model.create_solver(&SolverOptions::default());

        assert_eq!(solver.num_variables(), 1500);
        assert_eq!(solver.num_constraints(), model.registry().len());
    }

    #[test]
    fn root_cubes_cover_the_first_subject() {
        let model = TimetableModel::new(TimetableInstance::sample());
        let solver = model.create_solver(&SolverOptions::default());

        let cubes = model.root_cubes(&solver);

        assert_eq!(cubes.len(), 300);
        assert!(cubes
            .iter()
            .all(|cube| cube.is_positive() && model.space().key(cube.variable()).subject == 0));
    }

    #[test]
    fn decided_subjects_give_no_cubes() {
        let dimensions = Dimensions::new(1, 1, 1, 1, 1).expect("valid dimensions");
        let instance = TimetableInstance::new(
            dimensions,
            Preferences::from_fn(&dimensions, |_, _, _| true),
        )
        .expect("valid instance");
        let model = TimetableModel::new(instance);
        let solver = model.create_solver(&SolverOptions::default());

        assert!(model.root_cubes(&solver).is_empty());
    }
}
