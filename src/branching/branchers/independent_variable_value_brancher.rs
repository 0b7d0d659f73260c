//! A [`Brancher`] which simply uses a single [`VariableSelector`] and a single
//! [`ValueSelector`].

use crate::branching::Brancher;
use crate::branching::InDomainMax;
use crate::branching::MostConstrained;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;

/// The brancher used when the caller does not provide one: the most constrained group first,
/// trying 1 before 0.
pub type DefaultBrancher = IndependentVariableValueBrancher<MostConstrained, InDomainMax>;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a
/// single [`ValueSelector`] independently of one another.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    /// The [`VariableSelector`] of the [`Brancher`], determines which (unfixed) variable to
    /// branch next on.
    pub(crate) variable_selector: VariableSelect,
    /// The [`ValueSelector`] of the [`Brancher`] determines which value in the domain to branch
    /// next on given a variable.
    pub(crate) value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl DefaultBrancher {
    /// Branches on the group with the fewest open variables which has no variable at 1 yet.
    pub fn most_constrained(groups: Vec<Box<[VariableId]>>) -> Self {
        IndependentVariableValueBrancher::new(MostConstrained::new(groups), InDomainMax)
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    /// First we select a variable
    ///  - If all variables under consideration are fixed (i.e. `select_variable` return None)
    ///    then we simply return None
    ///  - Otherwise we select a value and return the corresponding literal
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Literal> {
        self.variable_selector
            .select_variable(context)
            .map(|selected_variable| self.value_selector.select_value(context, selected_variable))
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultBrancher;
    use super::IndependentVariableValueBrancher;
    use crate::branching::Brancher;
    use crate::branching::InDomainMin;
    use crate::branching::InputOrder;
    use crate::branching::SelectionContext;
    use crate::engine::variables::Literal;
    use crate::engine::variables::VariableId;

    #[test]
    fn default_brancher_tries_one_first() {
        let assignments = SelectionContext::create_for_testing(3);
        let variables = (0..3).map(VariableId::new).collect::<Vec<_>>();
        let mut brancher = DefaultBrancher::most_constrained(vec![variables.clone().into()]);

        let decision = brancher.next_decision(&SelectionContext::new(&assignments));

        assert_eq!(decision, Some(Literal::new(variables[0], true)));
    }

    #[test]
    fn composed_brancher_uses_both_selectors() {
        let mut assignments = SelectionContext::create_for_testing(3);
        let variables = (0..3).map(VariableId::new).collect::<Vec<_>>();
        let _ = assignments.assign(Literal::new(variables[0], true), true);
        let mut brancher =
            IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin);

        let decision = brancher.next_decision(&SelectionContext::new(&assignments));

        assert_eq!(decision, Some(Literal::new(variables[1], false)));
    }
}
