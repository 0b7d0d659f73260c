use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;

/// [`ValueSelector`] which chooses to assign the variable to 0 first.
#[derive(Debug, Copy, Clone)]
pub struct InDomainMin;

impl ValueSelector for InDomainMin {
    fn select_value(&mut self, _context: &SelectionContext, decision_variable: VariableId) -> Literal {
        Literal::new(decision_variable, false)
    }
}

#[cfg(test)]
mod tests {
    use crate::branching::InDomainMax;
    use crate::branching::InDomainMin;
    use crate::branching::SelectionContext;
    use crate::branching::ValueSelector;
    use crate::engine::variables::VariableId;

    #[test]
    fn selectors_pick_opposite_polarities() {
        let assignments = SelectionContext::create_for_testing(1);
        let context = SelectionContext::new(&assignments);
        let variable = VariableId::new(0);

        assert!(!InDomainMin.select_value(&context, variable).is_positive());
        assert!(InDomainMax.select_value(&context, variable).is_positive());
    }
}
