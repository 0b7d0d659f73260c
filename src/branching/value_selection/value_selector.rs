use crate::branching::SelectionContext;
use crate::engine::variables::Literal;
use crate::engine::variables::VariableId;

/// A trait containing the interface for [`ValueSelector`]s,
/// specifying the appropriate hooks and corresponding methods.
pub trait ValueSelector {
    /// Determines which value to try first for `decision_variable`, as a literal over it.
    fn select_value(&mut self, context: &SelectionContext, decision_variable: VariableId)
        -> Literal;
}
