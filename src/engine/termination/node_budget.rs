use super::TerminationCondition;

/// A [`TerminationCondition`] which allows a fixed number of search nodes. Every clone counts
/// its own nodes, so each parallel worker receives the full budget.
#[derive(Clone, Copy, Debug)]
pub struct NodeBudget {
    remaining: u64,
}

impl NodeBudget {
    pub fn new(max_nodes: u64) -> NodeBudget {
        NodeBudget {
            remaining: max_nodes,
        }
    }
}

impl TerminationCondition for NodeBudget {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }

        self.remaining -= 1;
        false
    }
}
