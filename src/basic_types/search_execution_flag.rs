/// How a call to the branch-and-bound search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchExecutionFlag {
    /// Every node of the search tree was either explored, pruned or refuted.
    Exhausted,
    /// The termination condition asked the search to stop before the tree was exhausted.
    Timeout,
}
