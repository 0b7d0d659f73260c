use enumset::EnumSet;
use enumset::EnumSetType;

use crate::engine::variables::VariableId;
use crate::propagators::ConstraintId;

/// The events a constraint can subscribe to for each of its variables.
#[derive(Debug, EnumSetType)]
pub(crate) enum BooleanDomainEvent {
    AssignedTrue,
    AssignedFalse,
}

impl BooleanDomainEvent {
    pub(crate) fn from_value(value: bool) -> Self {
        if value {
            BooleanDomainEvent::AssignedTrue
        } else {
            BooleanDomainEvent::AssignedFalse
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Watcher {
    constraint: ConstraintId,
    events: EnumSet<BooleanDomainEvent>,
}

/// For every variable, the constraints to enqueue when it is assigned.
#[derive(Clone, Debug, Default)]
pub(crate) struct WatchList {
    watchers: Vec<Vec<Watcher>>,
}

impl WatchList {
    pub(crate) fn grow(&mut self) {
        self.watchers.push(vec![]);
    }

    pub(crate) fn watch(
        &mut self,
        variable: VariableId,
        constraint: ConstraintId,
        events: EnumSet<BooleanDomainEvent>,
    ) {
        self.watchers[variable.index()].push(Watcher { constraint, events });
    }

    /// The constraints which subscribed to `event` on `variable`.
    pub(crate) fn affected_constraints(
        &self,
        variable: VariableId,
        event: BooleanDomainEvent,
    ) -> impl Iterator<Item = ConstraintId> + '_ {
        self.watchers[variable.index()]
            .iter()
            .filter(move |watcher| watcher.events.contains(event))
            .map(|watcher| watcher.constraint)
    }
}
