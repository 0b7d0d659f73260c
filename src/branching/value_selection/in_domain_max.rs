use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;

/// [`ValueSelector`] which chooses to assign the variable to 1 first.
#[derive(Debug, Copy, Clone)]
pub struct InDomainMax;

impl ValueSelector for InDomainMax {
    fn select_value(&mut self, _context: &SelectionContext, decision_variable: VariableId) -> Literal {
        Literal::new(decision_variable, true)
    }
}
