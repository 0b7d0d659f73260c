use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A trait containing the interface for [`VariableSelector`]s,
/// specifying the appropriate hooks and corresponding methods.
pub trait VariableSelector {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables which have been passed to the
    /// [`VariableSelector`] have been assigned. Otherwise it should return the variable to
    /// branch on next.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId>;
}
