use crate::branching::SelectionContext;
use crate::engine::variables::Literal;

/// A trait for definining a branching strategy.
///
/// The solver asks [`Brancher::next_decision`] for a literal at every node which it does not
/// prune; the returned literal must be unassigned. If the brancher returns `None` while
/// variables are still open, the solver falls back to the unassigned variable with the smallest
/// index, set to 1.
pub trait Brancher {
    /// Returns the next decision, or `None` if the brancher has nothing left to decide.
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Literal>;

    /// Called for every literal undone during backtracking; a brancher which caches assignment
    /// information can update itself here.
    fn on_unassign_literal(&mut self, _literal: Literal) {}
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_decision(&mut self, context: &SelectionContext) -> Option<Literal> {
        (**self).next_decision(context)
    }

    fn on_unassign_literal(&mut self, literal: Literal) {
        (**self).on_unassign_literal(literal)
    }
}
