use log::warn;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::engine::variables::VariableId;

/// A [`VariableSelector`] which selects the first variable which is not fixed given the order in
/// the provided list.
#[derive(Debug)]
pub struct InputOrder {
    variables: Vec<VariableId>,
}

impl InputOrder {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        self.variables
            .iter()
            .find(|variable| !context.is_fixed(**variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::branching::InputOrder;
    use crate::branching::SelectionContext;
    use crate::branching::VariableSelector;
    use crate::engine::variables::Literal;
    use crate::engine::variables::VariableId;

    #[test]
    fn test_correctly_selected() {
        let mut assignments = SelectionContext::create_for_testing(2);
        let variables = [VariableId::new(0), VariableId::new(1)];
        let mut strategy = InputOrder::new(&variables);

        {
            let context = SelectionContext::new(&assignments);
            let selected = strategy.select_variable(&context);
            assert_eq!(selected, Some(variables[0]));
        }

        let _ = assignments.assign(Literal::new(variables[0], false), true);

        let context = SelectionContext::new(&assignments);
        let selected = strategy.select_variable(&context);
        assert_eq!(selected, Some(variables[1]));
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let mut assignments = SelectionContext::create_for_testing(2);
        let variables = [VariableId::new(0), VariableId::new(1)];
        for variable in variables {
            let _ = assignments.assign(Literal::new(variable, true), true);
        }

        let mut strategy = InputOrder::new(&variables);
        let selected = strategy.select_variable(&SelectionContext::new(&assignments));
        assert!(selected.is_none());
    }
}
