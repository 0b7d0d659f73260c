use std::collections::VecDeque;

use crate::propagators::ConstraintId;

/// First-in first-out queue of constraints waiting to propagate. A constraint is enqueued at
/// most once at a time.
#[derive(Clone, Debug, Default)]
pub(crate) struct PropagatorQueue {
    queue: VecDeque<ConstraintId>,
    is_enqueued: Vec<bool>,
}

impl PropagatorQueue {
    pub(crate) fn grow(&mut self) {
        self.is_enqueued.push(false);
    }

    pub(crate) fn enqueue_propagator(&mut self, constraint: ConstraintId) {
        if !self.is_enqueued[constraint.index()] {
            self.is_enqueued[constraint.index()] = true;
            self.queue.push_back(constraint);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        self.is_enqueued[constraint.index()] = false;
        Some(constraint)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        for constraint in self.queue.drain(..) {
            self.is_enqueued[constraint.index()] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PropagatorQueue;
    use crate::propagators::ConstraintId;

    #[test]
    fn constraints_are_enqueued_once() {
        let mut queue = PropagatorQueue::default();
        queue.grow();
        queue.grow();

        queue.enqueue_propagator(ConstraintId::new(1));
        queue.enqueue_propagator(ConstraintId::new(0));
        queue.enqueue_propagator(ConstraintId::new(1));

        assert_eq!(queue.pop(), Some(ConstraintId::new(1)));
        assert_eq!(queue.pop(), Some(ConstraintId::new(0)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn cleared_constraints_can_be_enqueued_again() {
        let mut queue = PropagatorQueue::default();
        queue.grow();

        queue.enqueue_propagator(ConstraintId::new(0));
        queue.clear();
        assert!(queue.is_empty());

        queue.enqueue_propagator(ConstraintId::new(0));
        assert_eq!(queue.pop(), Some(ConstraintId::new(0)));
    }
}
