use crate::engine::EmptyDomain;

/// The result of invoking a cardinality propagator. The propagation can either succeed or
/// identify a contradiction, in which case the search backtracks.
pub(crate) type PropagationStatus = Result<(), Inconsistency>;

/// The reason a constraint can no longer be satisfied under the current partial assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// More than one variable of the group is assigned to true.
    TooManyTrue,
    /// Every variable of an exactly-one group is assigned to false.
    NoCandidate,
    /// A variable was forced to the value opposite to its current one.
    EmptyDomain,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
